use std::fs;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use common::types::STAGING_FILE_NAME;
use csv::QuoteStyle;
use csv::Terminator;
use csv::WriterBuilder;
use indicatif::ProgressBar;
use tracing::debug;
use tracing::warn;

use crate::error::Result;
use crate::facts::Transaction;

/// Tab separated fact rows waiting for the bulk copy. The file is removed
/// when the guard is dropped, whether or not the load succeeded.
pub struct StagingFile {
    path: PathBuf,
}

impl StagingFile {
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(STAGING_FILE_NAME);
        File::create(&path)?;
        debug!("staging file: {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> Result<BufWriter<File>> {
        Ok(BufWriter::new(File::create(&self.path)?))
    }

    pub fn open(&self) -> Result<File> {
        Ok(File::open(&self.path)?)
    }

    pub fn size(&self) -> Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("staging file removed: {}", self.path.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!(
                "can't remove staging file {}: {err}",
                self.path.display()
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagingStats {
    pub rows: u64,
    pub transactions: u64,
}

/// Writes one line per ticket in ticket id order, columns as in
/// `common::types::FACT_COLUMNS`.
pub fn write_transactions<W, I>(w: W, txs: I, pb: &ProgressBar) -> Result<StagingStats>
where
    W: Write,
    I: IntoIterator<Item = Transaction>,
{
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    let mut stats = StagingStats::default();
    for tx in txs {
        for t in &tx.tickets {
            wtr.write_record([
                t.ticket_id.to_string(),
                t.transaction_id.to_string(),
                t.date_key.to_string(),
                t.time_key.to_string(),
                t.customer_key.to_string(),
                t.promotion_key.to_string(),
                t.channel_key.to_string(),
                t.showing_key.to_string(),
                t.ticket_price.to_string(),
                t.ticket_count.to_string(),
            ])?;
        }
        stats.rows += tx.tickets.len() as u64;
        stats.transactions += 1;
        pb.inc(tx.tickets.len() as u64);
    }
    wtr.flush()?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use chrono::NaiveDate;
    use common::config::Pricing;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use super::*;
    use crate::facts::tests::pools;
    use crate::facts::FactGenerator;
    use crate::facts::KeyPools;

    fn key_pools() -> KeyPools {
        pools(
            NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2014, 1, 7).unwrap(),
        )
    }

    fn staged(seed: u64, rows: u64) -> (Vec<u8>, StagingStats) {
        let pools = key_pools();
        let pricing = Pricing::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let gen = FactGenerator::try_new(&mut rng, &pools, &pricing, rows).unwrap();
        let mut buf = vec![];
        let stats = write_transactions(&mut buf, gen, &ProgressBar::hidden()).unwrap();
        (buf, stats)
    }

    #[test]
    fn test_line_format() {
        let (buf, stats) = staged(42, 12);
        assert_eq!(stats.rows, 12);

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 12);

        let mut last_tx = 0;
        for (i, line) in lines.iter().enumerate() {
            let fields: Vec<_> = line.split('\t').collect();
            assert_eq!(fields.len(), 10);
            assert_eq!(fields[0], (i + 1).to_string());
            let tx: u64 = fields[1].parse().unwrap();
            assert!(tx == last_tx || tx == last_tx + 1);
            last_tx = tx;

            let (_, cents) = fields[8].split_once('.').unwrap();
            assert_eq!(cents.len(), 2);
            assert_eq!(fields[9], "1");
        }
        assert_eq!(last_tx, stats.transactions);
    }

    #[test]
    fn test_byte_identical_for_same_seed() {
        let (a, _) = staged(42, 1000);
        let (b, _) = staged(42, 1000);
        let (c, _) = staged(7, 1000);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_staging_file_removed_on_drop() -> Result<()> {
        let dir = TempDir::new()?;
        let path = {
            let staging = StagingFile::create(dir.path())?;
            let pools = key_pools();
            let pricing = Pricing::default();
            let mut rng = StdRng::seed_from_u64(1);
            let gen = FactGenerator::try_new(&mut rng, &pools, &pricing, 100)?;
            let stats = write_transactions(staging.writer()?, gen, &ProgressBar::hidden())?;
            assert_eq!(stats.rows, 100);
            assert!(staging.size()? > 0);

            let mut content = String::new();
            staging.open()?.read_to_string(&mut content)?;
            assert_eq!(content.lines().count(), 100);

            staging.path().to_path_buf()
        };
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_drop_tolerates_missing_file() -> Result<()> {
        let dir = TempDir::new()?;
        let staging = StagingFile::create(&dir.path().join("nested"))?;
        assert!(staging.path().ends_with(STAGING_FILE_NAME));
        fs::remove_file(staging.path())?;
        drop(staging);
        Ok(())
    }
}
