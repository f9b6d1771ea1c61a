use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::config::Config;
use common::config::LogLevel;
use postgres::Client;
use postgres::NoTls;
use reports::Runner;
use reports::REPORTS;
use tracing::info;

use crate::command::log_level_override;
use crate::config::Overrides;
use crate::error::Result;

#[derive(Parser, Clone, Debug)]
pub struct Report {
    /// libpq connection string
    #[arg(long)]
    pub dsn: Option<String>,
    /// Directory for the CSV exports
    #[arg(long)]
    pub outdir: Option<PathBuf>,
    /// Rows to preview per report
    #[arg(long)]
    pub head: Option<usize>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Report {
    pub fn overrides(&self, log_level: Option<LogLevel>) -> Overrides {
        vec![
            log_level_override(log_level),
            ("database.dsn", self.dsn.clone()),
            (
                "report.outdir",
                self.outdir.as_ref().map(|v| v.display().to_string()),
            ),
            ("report.head", self.head.map(|v| v.to_string())),
        ]
    }
}

pub fn run(cfg: &Config) -> Result<()> {
    cfg.database.validate()?;

    info!("connecting to database...");
    let mut client = Client::connect(&cfg.database.dsn, NoTls)?;
    let runner = Runner::from_config(&cfg.report)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.run_all(&mut client, &REPORTS, &mut out)?;

    Ok(())
}
