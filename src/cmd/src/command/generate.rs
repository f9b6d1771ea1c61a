use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use common::config::Config;
use common::config::LogLevel;
use postgres::Client;
use postgres::NoTls;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;
use warehouse_gen::pipeline;

use crate::command::log_level_override;
use crate::config::Overrides;
use crate::error::Result;

#[derive(Parser, Clone, Debug)]
pub struct Generate {
    /// libpq connection string
    #[arg(long)]
    pub dsn: Option<String>,
    /// Number of fact rows
    #[arg(long)]
    pub rows: Option<u64>,
    #[arg(long)]
    pub customers: Option<u64>,
    #[arg(long)]
    pub showings: Option<u64>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// First day of the calendar, YYYY-MM-DD
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last day of the calendar, YYYY-MM-DD
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Directory for the fact staging file
    #[arg(long)]
    pub staging_dir: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Generate {
    pub fn overrides(&self, log_level: Option<LogLevel>) -> Overrides {
        vec![
            log_level_override(log_level),
            ("database.dsn", self.dsn.clone()),
            ("generate.rows", self.rows.map(|v| v.to_string())),
            ("generate.customers", self.customers.map(|v| v.to_string())),
            ("generate.showings", self.showings.map(|v| v.to_string())),
            ("generate.seed", self.seed.map(|v| v.to_string())),
            ("generate.start", self.start.map(|v| v.to_string())),
            ("generate.end", self.end.map(|v| v.to_string())),
            (
                "generate.staging_dir",
                self.staging_dir.as_ref().map(|v| v.display().to_string()),
            ),
        ]
    }
}

/// `1234567` -> `1,234,567`
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

pub fn run(cfg: &Config) -> Result<()> {
    cfg.validate()?;
    debug!("seed: {}", cfg.generate.seed);
    debug!("date range: {}..={}", cfg.generate.start, cfg.generate.end);
    debug!(
        "rows: {}, customers: {}, showings: {}",
        cfg.generate.rows, cfg.generate.customers, cfg.generate.showings
    );

    info!("connecting to database...");
    let mut client = Client::connect(&cfg.database.dsn, NoTls)?;
    let mut rng = StdRng::seed_from_u64(cfg.generate.seed);
    let summary = pipeline::run(
        &mut client,
        &mut rng,
        &pipeline::Config::from_config(cfg),
    )?;

    println!("Loaded fact rows: {}", thousands(summary.fact_rows));

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        generate: Generate,
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_000_000), "1,000,000");
        assert_eq!(thousands(-12345), "-12,345");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "generate",
            "--dsn",
            "host=localhost",
            "--rows",
            "12",
            "--start",
            "2014-01-01",
        ])
        .unwrap();
        let overrides = cli.generate.overrides(Some(LogLevel::Warn));
        let get = |k: &str| {
            overrides
                .iter()
                .find(|(key, _)| *key == k)
                .and_then(|(_, v)| v.clone())
        };
        assert_eq!(get("log.level").as_deref(), Some("warn"));
        assert_eq!(get("database.dsn").as_deref(), Some("host=localhost"));
        assert_eq!(get("generate.rows").as_deref(), Some("12"));
        assert_eq!(get("generate.start").as_deref(), Some("2014-01-01"));
        assert_eq!(get("generate.seed"), None);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Cli::try_parse_from(["generate", "--start", "2014-13-01"]).is_err());
    }
}
