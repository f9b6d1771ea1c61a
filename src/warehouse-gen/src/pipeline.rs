use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use bytesize::ByteSize;
use chrono::NaiveDate;
use common::config;
use common::config::Pricing;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use postgres::Client;
use rand::Rng;
use tracing::debug;
use tracing::info;

use crate::dims::channels;
use crate::dims::customers;
use crate::dims::date;
use crate::dims::promotions;
use crate::dims::showings;
use crate::dims::showings::CinemaProvider;
use crate::dims::showings::MovieProvider;
use crate::dims::time;
use crate::dims::DimensionRow;
use crate::error::Result;
use crate::error::WarehouseGenError;
use crate::facts::staging::write_transactions;
use crate::facts::staging::StagingFile;
use crate::facts::FactGenerator;
use crate::loader;
use crate::schema;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: u64,
    pub customers: u64,
    pub showings: u64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub staging_dir: PathBuf,
    pub pricing: Pricing,
}

impl Config {
    pub fn from_config(cfg: &config::Config) -> Self {
        Self {
            rows: cfg.generate.rows,
            customers: cfg.generate.customers,
            showings: cfg.generate.showings,
            start: cfg.generate.start,
            end: cfg.generate.end,
            staging_dir: cfg.generate.staging_dir.clone(),
            pricing: cfg.pricing.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub dates: u64,
    pub times: u64,
    pub promotions: u64,
    pub channels: u64,
    pub customers: u64,
    pub showings: u64,
    pub transactions: u64,
    pub staged_rows: u64,
    pub copied_rows: u64,
    /// Rows counted in the fact table after the load.
    pub fact_rows: i64,
    pub elapsed: Duration,
}

fn populate<T: DimensionRow>(client: &mut Client, name: &str, rows: &[T]) -> Result<u64> {
    let start = Instant::now();
    let mut tx = client.transaction()?;
    let n = loader::insert_rows(&mut tx, rows)?;
    tx.commit()?;
    debug!(
        "{name}: {n} rows in {}",
        humantime::format_duration(start.elapsed())
    );

    Ok(n)
}

fn progress_bar(rows: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(rows);
    pb.set_style(
        ProgressStyle::with_template(concat!(
            "{spinner:.green} [{elapsed_precise}] ",
            "[{wide_bar:.cyan/blue}] {pos}/{len} tickets ({eta})"
        ))?
        .progress_chars("#>-"),
    );

    Ok(pb)
}

/// Rebuilds schema `dw` and loads it. Draws from `rng` in a fixed order:
/// customers, cinemas, movies, showings, then facts.
pub fn run<R: Rng>(client: &mut Client, rng: &mut R, cfg: &Config) -> Result<Summary> {
    if cfg.start > cfg.end {
        return Err(WarehouseGenError::InvalidDateRange(cfg.start, cfg.end));
    }
    cfg.pricing.validate()?;

    let start = Instant::now();
    let mut summary = Summary::default();

    info!("building schema...");
    schema::build(client)?;

    info!("populating dimensions...");
    summary.dates = populate(client, "dates", &date::generate(cfg.start, cfg.end)?)?;
    summary.times = populate(client, "times", &time::generate()?)?;
    summary.promotions = populate(client, "promotions", &promotions::generate())?;
    summary.channels = populate(client, "channels", &channels::generate())?;
    summary.customers = populate(
        client,
        "customers",
        &customers::generate(rng, cfg.customers)?,
    )?;

    let cinemas = CinemaProvider::generate(rng, showings::CINEMAS);
    let movies = MovieProvider::generate(rng, showings::MOVIES)?;
    let rows = showings::generate(rng, showings::Config {
        start: cfg.start,
        end: cfg.end,
        showings: cfg.showings,
        cinemas: &cinemas,
        movies: &movies,
    })?;
    summary.showings = populate(client, "showings", &rows)?;
    drop(rows);

    info!("generating facts...");
    let pools = loader::fetch_key_pools(client)?;
    debug!(
        "key pools: {} dates, {} times, {} customers, {} promotions, {} channels, {} showings",
        pools.dates.len(),
        pools.times.len(),
        pools.customers.len(),
        pools.promotions.len(),
        pools.channels.len(),
        pools.showings.len()
    );

    let staging = StagingFile::create(&cfg.staging_dir)?;
    let pb = progress_bar(cfg.rows)?;
    let gen = FactGenerator::try_new(rng, &pools, &cfg.pricing, cfg.rows)?;
    let stats = write_transactions(staging.writer()?, gen, &pb)?;
    pb.finish_and_clear();
    summary.staged_rows = stats.rows;
    summary.transactions = stats.transactions;
    debug!(
        "staged {} tickets in {} transactions, {}",
        stats.rows,
        stats.transactions,
        ByteSize::b(staging.size()?)
    );

    info!("loading facts...");
    let load_start = Instant::now();
    let mut tx = client.transaction()?;
    summary.copied_rows = loader::copy_facts(&mut tx, &staging)?;
    tx.commit()?;
    drop(staging);
    debug!(
        "copied {} rows in {}",
        summary.copied_rows,
        humantime::format_duration(load_start.elapsed())
    );

    summary.fact_rows = loader::count_facts(client)?;
    info!("loaded fact rows: {}", summary.fact_rows);

    summary.elapsed = start.elapsed();
    info!(
        "warehouse generated in {}",
        humantime::format_duration(summary.elapsed)
    );

    Ok(summary)
}
