//! Formula evaluation.
//!
//! An [`Evaluator`] reads raw cell strings through a [`CellSource`] and
//! evaluates formula bodies to integers. Every top-level read owns a fresh
//! [`Session`]; nested reference resolutions borrow it so cycles are caught
//! across the whole reference chain.

use super::cell::{CellContents, CellSource, parse_integer};
use super::format::format_value;
use super::lexer::tokenize;
use super::parser::{BinaryOp, Expr, parse};
use super::session::Session;
use crate::error::{EvalError, Result};

/// Default bound on how deeply references and parenthesized groups may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluation limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalOptions {
    /// Deepest combined nesting of references and parentheses before
    /// evaluation gives up with `#Error`.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluates formulas against a set of cells.
pub struct Evaluator<'a, S: CellSource + ?Sized> {
    source: &'a S,
    options: EvalOptions,
}

impl<'a, S: CellSource + ?Sized> Evaluator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self::with_options(source, EvalOptions::default())
    }

    pub fn with_options(source: &'a S, options: EvalOptions) -> Self {
        Evaluator { source, options }
    }

    /// Evaluate a formula body (leading `=` already stripped) to its display
    /// string: a decimal integer, `""` for a blank formula, or a sentinel.
    pub fn calculate(&self, body: &str) -> String {
        let mut session = self.session();
        let value = self.evaluate(body, &mut session);
        log_outcome(body, &value);
        format_value(&value)
    }

    /// Display string of cell `id`: literals as stored (integers trimmed),
    /// formulas evaluated, missing cells as `""`.
    pub fn display_cell(&self, id: &str) -> String {
        let raw = self.source.raw(id).unwrap_or_default();
        let contents = CellContents::classify(&raw);
        if let Some(display) = contents.literal_display() {
            return display;
        }
        let CellContents::Formula(body) = contents else {
            return String::new();
        };

        let mut session = self.session();
        let value = session
            .enter(id)
            .and_then(|()| self.evaluate(body, &mut session));
        log_outcome(id, &value);
        format_value(&value)
    }

    /// Evaluate a formula body within an existing session.
    ///
    /// Returns `Ok(None)` for a blank formula.
    pub fn evaluate(&self, body: &str, session: &mut Session) -> Result<Option<i64>> {
        let tokens = tokenize(body)?;
        let Some(expr) = parse(&tokens, self.options.max_depth)? else {
            return Ok(None);
        };
        self.eval_expr(&expr, session).map(Some)
    }

    fn session(&self) -> Session {
        Session::new(self.options.max_depth)
    }

    fn eval_expr(&self, expr: &Expr, session: &mut Session) -> Result<i64> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Ref(id) => self.resolve_reference(id, session),
            Expr::Neg(inner) => self
                .eval_expr(inner, session)?
                .checked_neg()
                .ok_or(EvalError::Overflow),
            Expr::Group(inner) => {
                session.enter_group()?;
                let value = self.eval_expr(inner, session);
                session.leave_group();
                value
            }
            Expr::Chain { first, rest } => {
                let mut acc = self.eval_expr(first, session)?;
                for (op, operand) in rest {
                    let rhs = self.eval_expr(operand, session)?;
                    acc = apply(*op, acc, rhs)?;
                }
                Ok(acc)
            }
        }
    }

    /// Numeric value of a referenced cell, evaluating its formula if needed.
    fn resolve_reference(&self, id: &str, session: &mut Session) -> Result<i64> {
        session.enter(id)?;
        log::trace!("resolving {} at depth {}", id, session.depth());

        let raw = self.source.raw(id).unwrap_or_default();
        let value = match CellContents::classify(&raw) {
            CellContents::Empty => 0,
            CellContents::Integer(text) => parse_integer(text)?,
            CellContents::Text(text) => return Err(EvalError::NotANumber(text.to_string())),
            CellContents::Formula(body) => self.evaluate(body, session)?.unwrap_or(0),
        };

        session.resolve(id);
        Ok(value)
    }
}

fn apply(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64> {
    let result = match op {
        BinaryOp::Add => lhs.checked_add(rhs),
        BinaryOp::Sub => lhs.checked_sub(rhs),
        BinaryOp::Mul => lhs.checked_mul(rhs),
        BinaryOp::Div => {
            if rhs == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // Rust integer division truncates toward zero.
            lhs.checked_div(rhs)
        }
    };
    result.ok_or(EvalError::Overflow)
}

fn log_outcome(what: &str, value: &Result<Option<i64>>) {
    match value {
        Ok(value) => log::debug!("evaluated {}: {:?}", what, value),
        Err(e) => log::debug!("evaluating {} failed: {}", what, e),
    }
}
