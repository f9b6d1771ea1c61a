use std::env::temp_dir;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::CommonError;
use crate::error::Result;

#[derive(Serialize, Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

/// libpq-style connection string, passed to the driver as is.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    pub dsn: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Generate {
    pub rows: u64,
    pub customers: u64,
    pub showings: u64,
    pub seed: u64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub staging_dir: PathBuf,
}

impl Default for Generate {
    fn default() -> Self {
        Self {
            rows: 1_000_000,
            customers: 80_000,
            showings: 40_000,
            seed: 42,
            start: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default(),
            staging_dir: temp_dir(),
        }
    }
}

/// Ticket price model. Ranges are half-open `[min, max)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pricing {
    pub base_min: f64,
    pub base_max: f64,
    pub online_adjust_min: f64,
    pub online_adjust_max: f64,
    pub promotion_probability: f64,
    pub markdown_min: f64,
    pub markdown_max: f64,
    /// Per-ticket jitter is drawn from `[-jitter, jitter)`.
    pub jitter: f64,
    pub floor: f64,
    pub max_tickets_per_transaction: u64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_min: 20.0,
            base_max: 80.0,
            online_adjust_min: -2.0,
            online_adjust_max: 3.0,
            promotion_probability: 0.35,
            markdown_min: 0.80,
            markdown_max: 0.95,
            jitter: 5.0,
            floor: 10.0,
            max_tickets_per_transaction: 6,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outdir: PathBuf,
    pub head: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("outputs"),
            head: 25,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub log: Log,
    pub database: Database,
    pub generate: Generate,
    pub pricing: Pricing,
    pub report: Report,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.database.validate()?;
        self.generate.validate()?;
        self.pricing.validate()
    }
}

impl Database {
    pub fn validate(&self) -> Result<()> {
        if self.dsn.trim().is_empty() {
            return Err(CommonError::InvalidConfig(
                "database dsn is not set".to_string(),
            ));
        }

        Ok(())
    }
}

impl Generate {
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(CommonError::InvalidConfig(format!(
                "start date {} is after end date {}",
                self.start, self.end
            )));
        }
        if self.customers == 0 {
            return Err(CommonError::InvalidConfig(
                "customers should be positive".to_string(),
            ));
        }
        if self.showings == 0 {
            return Err(CommonError::InvalidConfig(
                "showings should be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Pricing {
    pub fn validate(&self) -> Result<()> {
        let ranges = [
            ("base price", self.base_min, self.base_max),
            (
                "online adjustment",
                self.online_adjust_min,
                self.online_adjust_max,
            ),
            ("markdown", self.markdown_min, self.markdown_max),
        ];
        for (name, min, max) in ranges {
            if !min.is_finite() || !max.is_finite() {
                return Err(CommonError::InvalidConfig(format!(
                    "{name} range [{min}, {max}) should be finite"
                )));
            }
            if !(min < max) {
                return Err(CommonError::InvalidConfig(format!(
                    "{name} range [{min}, {max}) is empty"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.promotion_probability) {
            return Err(CommonError::InvalidConfig(format!(
                "promotion probability {} is out of [0, 1]",
                self.promotion_probability
            )));
        }
        if !(self.jitter > 0.0 && self.jitter.is_finite()) {
            return Err(CommonError::InvalidConfig(
                "jitter should be positive and finite".to_string(),
            ));
        }
        if !self.floor.is_finite() {
            return Err(CommonError::InvalidConfig(format!(
                "price floor {} should be finite",
                self.floor
            )));
        }
        if self.max_tickets_per_transaction == 0 {
            return Err(CommonError::InvalidConfig(
                "max tickets per transaction should be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn config() -> Config {
        Config {
            database: Database {
                dsn: "host=localhost dbname=dw".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(config().validate().is_ok());
        assert!(Config::default().validate().is_err());
    }

    #[test]
    fn test_reversed_date_range() {
        let mut cfg = config();
        cfg.generate.start = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        cfg.generate.end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(cfg.validate().is_err());

        cfg.generate.end = cfg.generate.start;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_price_range() {
        let mut cfg = config();
        cfg.pricing.base_max = cfg.pricing.base_min;
        assert!(cfg.validate().is_err());
    }

    #[rstest]
    #[case::base_min(|p: &mut Pricing| p.base_min = f64::NEG_INFINITY)]
    #[case::base_max(|p: &mut Pricing| p.base_max = f64::INFINITY)]
    #[case::online_adjust_min(|p: &mut Pricing| p.online_adjust_min = f64::NEG_INFINITY)]
    #[case::online_adjust_max(|p: &mut Pricing| p.online_adjust_max = f64::INFINITY)]
    #[case::markdown_min(|p: &mut Pricing| p.markdown_min = f64::NAN)]
    #[case::markdown_max(|p: &mut Pricing| p.markdown_max = f64::INFINITY)]
    #[case::jitter(|p: &mut Pricing| p.jitter = f64::INFINITY)]
    #[case::floor(|p: &mut Pricing| p.floor = f64::NEG_INFINITY)]
    fn test_non_finite_pricing(#[case] set: fn(&mut Pricing)) {
        let mut cfg = config();
        set(&mut cfg.pricing);
        assert!(matches!(
            cfg.validate(),
            Err(CommonError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_promotion_probability_bounds() {
        let mut cfg = config();
        cfg.pricing.promotion_probability = 1.5;
        assert!(cfg.validate().is_err());
        cfg.pricing.promotion_probability = 0.0;
        assert!(cfg.validate().is_ok());
    }
}
