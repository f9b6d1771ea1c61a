use std::result;

use common::error::CommonError;
use reports::ReportError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use warehouse_gen::WarehouseGenError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config: {0:?}")]
    Config(#[from] config::ConfigError),
    #[error("InvalidConfig: {0:?}")]
    InvalidConfig(#[from] CommonError),
    #[error("WarehouseGen: {0:?}")]
    WarehouseGen(#[from] WarehouseGenError),
    #[error("Report: {0:?}")]
    Report(#[from] ReportError),
    #[error("Postgres: {0:?}")]
    Postgres(#[from] postgres::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
}
