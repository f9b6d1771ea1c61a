use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use common::config;
use postgres::Client;
use postgres::SimpleQueryMessage;
use tracing::debug;
use tracing::info;

use crate::catalogue::Report;
use crate::error::Result;
use crate::result::ResultSet;

/// Runs `sql` in a read-only transaction and collects every row as text.
pub fn query(client: &mut Client, sql: &str) -> Result<ResultSet> {
    let mut tx = client.build_transaction().read_only(true).start()?;
    let mut rs = ResultSet::default();
    for msg in tx.simple_query(sql)? {
        match msg {
            SimpleQueryMessage::RowDescription(cols) => {
                rs.columns = cols.iter().map(|c| c.name().to_string()).collect();
            }
            SimpleQueryMessage::Row(row) => {
                if rs.columns.is_empty() {
                    rs.columns = row.columns().iter().map(|c| c.name().to_string()).collect();
                }
                let mut values = Vec::with_capacity(row.len());
                for idx in 0..row.len() {
                    values.push(row.try_get(idx)?.map(|v| v.to_string()));
                }
                rs.rows.push(values);
            }
            _ => {}
        }
    }
    tx.commit()?;

    Ok(rs)
}

pub struct Runner {
    outdir: PathBuf,
    head: usize,
}

impl Runner {
    pub fn try_new(outdir: impl Into<PathBuf>, head: usize) -> Result<Self> {
        let outdir = outdir.into();
        fs::create_dir_all(&outdir)?;

        Ok(Self { outdir, head })
    }

    pub fn from_config(cfg: &config::Report) -> Result<Self> {
        Self::try_new(cfg.outdir.clone(), cfg.head)
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    pub fn csv_path(&self, report: &Report) -> PathBuf {
        self.outdir.join(format!("{}.csv", report.name))
    }

    /// Runs, exports and previews a single report. Returns the CSV path.
    pub fn run_report<W: Write>(
        &self,
        client: &mut Client,
        report: &Report,
        out: &mut W,
    ) -> Result<PathBuf> {
        let start = Instant::now();
        debug!("running {}...", report.name);
        let rs = query(client, report.sql)?;
        debug!(
            "{}: {} rows in {}",
            report.name,
            rs.len(),
            humantime::format_duration(start.elapsed())
        );

        let path = self.csv_path(report);
        let mut w = BufWriter::new(File::create(&path)?);
        rs.write_csv(&mut w)?;
        w.flush()?;

        writeln!(out, "\n=== {} ===", report.name)?;
        write!(out, "{}", rs.head(self.head))?;
        writeln!(out, "saved: {}", path.display())?;

        Ok(path)
    }

    /// Runs reports in order. The first failure aborts the rest of the batch.
    pub fn run_all<W: Write>(
        &self,
        client: &mut Client,
        reports: &[Report],
        out: &mut W,
    ) -> Result<Vec<PathBuf>> {
        info!("running {} reports...", reports.len());
        let mut paths = Vec::with_capacity(reports.len());
        for report in reports {
            paths.push(self.run_report(client, report, out)?);
        }
        info!("reports saved to {}", self.outdir.display());

        Ok(paths)
    }
}
