//! Error types for Tally core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur outside formula evaluation.
///
/// Formula failures never surface here: they are rendered as `#Error` or
/// `#Circular` in place of a cell value.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, TallyError>;
