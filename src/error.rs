//! Error types for the command line

use thiserror::Error;

/// Errors in the command line arguments
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Expected ID=VALUE, got '{0}'")]
    InvalidAssignment(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
