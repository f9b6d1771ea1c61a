//! Synthetic star-schema warehouse for cinema ticket sales.
//!
//! [`pipeline::run`] rebuilds schema `dw`, populates the six dimensions and
//! bulk loads the ticket sales fact table through a staging file.

pub mod calendar;
pub mod dims;
pub mod error;
pub mod facts;
pub mod loader;
pub mod pipeline;
pub mod schema;
pub mod vocab;

pub use error::Result;
pub use error::WarehouseGenError;
