//! Error types for formula evaluation.

use thiserror::Error;

/// Display token for syntax, type and arithmetic failures.
pub const ERROR_TOKEN: &str = "#Error";
/// Display token for circular references.
pub const CIRCULAR_TOKEN: &str = "#Circular";

/// Errors that can occur while evaluating a formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Unexpected end of formula")]
    UnexpectedEnd,

    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow")]
    Overflow,

    #[error("Circular reference through {0}")]
    Circular(String),

    #[error("Reference depth limit of {0} exceeded")]
    DepthExceeded(usize),
}

impl EvalError {
    /// The sentinel string shown in place of a value.
    pub fn sentinel(&self) -> &'static str {
        match self {
            EvalError::Circular(_) => CIRCULAR_TOKEN,
            _ => ERROR_TOKEN,
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
