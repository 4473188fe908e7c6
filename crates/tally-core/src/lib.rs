//! tally-core - UI-agnostic cell store + configuration.

pub mod config;
pub mod document;
pub mod error;

pub use config::SheetConfig;
pub use document::Sheet;
pub use error::{Result, TallyError};
