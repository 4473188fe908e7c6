//! Formula engine API.
//!
//! This module provides the computation side of the spreadsheet:
//!
//! - [`CellContents`], [`CellSource`], [`Grid`] - Raw cell strings and how they are read
//! - [`is_referenceable`] - Which cell ids can appear inside a formula
//! - [`tokenize`] / [`parse`] - Formula text to [`Expr`]
//! - [`Evaluator`] - Formula evaluation with reference resolution
//! - [`Session`] - Circular reference detection for one read
//! - [`format_value`] - Format results for display

mod cell;
mod cell_ref;
mod eval;
mod format;
mod lexer;
mod parser;
mod session;

pub use cell::{CellContents, CellSource, Grid};
pub use cell_ref::is_referenceable;
pub use eval::{DEFAULT_MAX_DEPTH, EvalOptions, Evaluator};
pub use format::{format_value, is_error_display};
pub use lexer::{Token, tokenize};
pub use parser::{BinaryOp, Expr, parse};
pub use session::{Session, Status};
