use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Postgres: {0:?}")]
    Postgres(#[from] postgres::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
}
