//! Fixed analytical reports over the `dw` star schema. Each report runs in a
//! read-only transaction and is exported as CSV.

pub mod catalogue;
pub mod error;
pub mod result;
pub mod runner;

pub use catalogue::Report;
pub use catalogue::REPORTS;
pub use error::ReportError;
pub use error::Result;
pub use runner::Runner;
