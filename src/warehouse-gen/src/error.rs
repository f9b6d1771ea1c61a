use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, WarehouseGenError>;

#[derive(Error, Debug)]
pub enum WarehouseGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("SchemaVerification: {0:?}")]
    SchemaVerification(String),
    #[error("EmptyPool: {0:?}")]
    EmptyPool(&'static str),
    #[error("InvalidDateRange: {0} > {1}")]
    InvalidDateRange(chrono::NaiveDate, chrono::NaiveDate),
    #[error("Postgres: {0:?}")]
    Postgres(#[from] postgres::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("ProgressTemplate: {0:?}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
    #[error("Config: {0:?}")]
    Config(#[from] common::error::CommonError),
}
