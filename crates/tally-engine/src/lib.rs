//! tally_engine - Integer formula engine for the Tally spreadsheet.

pub mod engine;
pub mod error;

pub use error::{EvalError, Result};
