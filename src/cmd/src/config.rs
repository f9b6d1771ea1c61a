use std::path::Path;

use ::config::Environment;
use ::config::File;
use common::config::Config;
use tracing::debug;

use crate::error::Result;

pub const ENV_PREFIX: &str = "WAREHOUSE";
pub const ENV_SEPARATOR: &str = "__";

/// Command line values that take precedence over every other source. Keys are
/// dotted paths into [`Config`], `None` leaves the key untouched.
pub type Overrides = Vec<(&'static str, Option<String>)>;

/// Builds the configuration from, in increasing priority: built-in defaults,
/// the optional config file, `WAREHOUSE__SECTION__KEY` environment variables
/// and command line overrides.
pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Config> {
    load_with_env_prefix(ENV_PREFIX, path, overrides)
}

pub fn load_with_env_prefix(
    env_prefix: &str,
    path: Option<&Path>,
    overrides: Overrides,
) -> Result<Config> {
    let mut builder =
        ::config::Config::builder().add_source(::config::Config::try_from(&Config::default())?);
    if let Some(path) = path {
        debug!("config file: {}", path.display());
        builder = builder.add_source(File::from(path));
    }
    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );
    for (key, value) in overrides {
        builder = builder.set_override_option(key, value)?;
    }

    Ok(builder.build()?.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use chrono::NaiveDate;
    use common::config::LogLevel;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() -> Result<()> {
        let cfg = load_with_env_prefix("WAREHOUSE_TEST_DEFAULTS", None, vec![])?;
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.generate.rows, 1_000_000);
        assert_eq!(cfg.report.head, 25);
        Ok(())
    }

    #[test]
    fn test_file_env_and_overrides() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("warehouse.toml");
        fs::write(
            &path,
            r#"
[log]
level = "debug"

[database]
dsn = "host=db dbname=dw"

[generate]
rows = 5000
start = "2018-01-01"
end = "2018-12-31"

[pricing]
jitter = 2.5
"#,
        )?;

        env::set_var("WAREHOUSE_TEST_LAYERS__GENERATE__CUSTOMERS", "123");
        env::set_var("WAREHOUSE_TEST_LAYERS__GENERATE__ROWS", "6000");
        let cfg = load_with_env_prefix("WAREHOUSE_TEST_LAYERS", Some(&path), vec![
            ("generate.rows", Some("7000".to_string())),
            ("generate.seed", None),
            ("report.head", Some("3".to_string())),
        ])?;

        assert_eq!(cfg.log.level, LogLevel::Debug);
        assert_eq!(cfg.database.dsn, "host=db dbname=dw");
        assert_eq!(cfg.generate.rows, 7000);
        assert_eq!(cfg.generate.customers, 123);
        assert_eq!(cfg.generate.seed, 42);
        assert_eq!(
            cfg.generate.start,
            NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
        );
        assert_eq!(cfg.pricing.jitter, 2.5);
        assert_eq!(cfg.pricing.floor, 10.0);
        assert_eq!(cfg.report.head, 3);
        assert!(cfg.validate().is_ok());
        Ok(())
    }

    #[test]
    fn test_bad_value() {
        let res = load_with_env_prefix("WAREHOUSE_TEST_BAD", None, vec![(
            "generate.start",
            Some("not a date".to_string()),
        )]);
        assert!(res.is_err());
    }
}
