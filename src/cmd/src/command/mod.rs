pub mod generate;
pub mod report;

use common::config::LogLevel;

/// A `--log-level` given on the command line, as a config override.
pub(crate) fn log_level_override(level: Option<LogLevel>) -> (&'static str, Option<String>) {
    let value = level.and_then(|l| {
        clap::ValueEnum::to_possible_value(&l).map(|v| v.get_name().to_string())
    });

    ("log.level", value)
}
