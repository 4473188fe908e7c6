//! Cell contents and the read seam the evaluator uses.
//!
//! - [`CellContents`] - Read-time classification of a raw stored string
//! - [`CellSource`] - Read access to raw cell strings
//! - [`Grid`] - Thread-safe sparse storage for raw cell strings (backed by `DashMap`)

use dashmap::DashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

use super::cell_ref::is_integer_word;
use crate::error::{EvalError, Result};

/// Thread-safe sparse grid storage: cell id -> raw stored string.
pub type Grid = DashMap<String, String>;

/// Read access to the raw strings stored in cells.
///
/// Values are returned owned so no storage lock is held while a referenced
/// formula is evaluated.
pub trait CellSource {
    fn raw(&self, id: &str) -> Option<String>;
}

impl<S: BuildHasher + Clone> CellSource for DashMap<String, String, S> {
    fn raw(&self, id: &str) -> Option<String> {
        self.get(id).map(|entry| entry.value().clone())
    }
}

impl<S: BuildHasher> CellSource for HashMap<String, String, S> {
    fn raw(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

/// What a raw stored string means when it is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellContents<'a> {
    /// Nothing stored, or the empty string.
    Empty,
    /// An integer literal, already trimmed.
    Integer(&'a str),
    /// Any other literal, verbatim.
    Text(&'a str),
    /// A formula body with the leading `=` removed.
    Formula(&'a str),
}

impl<'a> CellContents<'a> {
    /// Classify raw cell input.
    /// - Empty string -> Empty
    /// - Starts with '=' -> Formula (without the '=')
    /// - Trimmed text is an optionally signed run of digits (`1_000` style
    ///   grouping allowed) -> Integer
    /// - Otherwise -> Text
    pub fn classify(raw: &'a str) -> CellContents<'a> {
        if raw.is_empty() {
            return CellContents::Empty;
        }

        if let Some(body) = raw.strip_prefix('=') {
            return CellContents::Formula(body);
        }

        let trimmed = raw.trim();
        if is_integer_literal(trimmed) {
            CellContents::Integer(trimmed)
        } else {
            CellContents::Text(raw)
        }
    }

    /// Display string for a literal cell. Formulas need the evaluator and
    /// yield `None`.
    pub fn literal_display(&self) -> Option<String> {
        match self {
            CellContents::Empty => Some(String::new()),
            CellContents::Integer(text) | CellContents::Text(text) => Some(text.to_string()),
            CellContents::Formula(_) => None,
        }
    }
}

fn is_integer_literal(text: &str) -> bool {
    is_integer_word(text.strip_prefix(['+', '-']).unwrap_or(text))
}

/// Numeric value of a trimmed integer literal.
pub(crate) fn parse_integer(text: &str) -> Result<i64> {
    text.replace('_', "")
        .parse::<i64>()
        .map_err(|_| EvalError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(CellContents::classify(""), CellContents::Empty);
        assert_eq!(CellContents::classify("=1+2"), CellContents::Formula("1+2"));
        assert_eq!(CellContents::classify("="), CellContents::Formula(""));
        assert_eq!(CellContents::classify(" 42 "), CellContents::Integer("42"));
        assert_eq!(CellContents::classify("-7"), CellContents::Integer("-7"));
        assert_eq!(CellContents::classify("+7"), CellContents::Integer("+7"));
        assert_eq!(CellContents::classify("hello"), CellContents::Text("hello"));
        assert_eq!(CellContents::classify("   "), CellContents::Text("   "));
        assert_eq!(CellContents::classify("1.5"), CellContents::Text("1.5"));
        assert_eq!(CellContents::classify(" =1"), CellContents::Text(" =1"));
        assert_eq!(CellContents::classify("-"), CellContents::Text("-"));
        assert_eq!(CellContents::classify(" 1_000 "), CellContents::Integer("1_000"));
        assert_eq!(CellContents::classify("1__0"), CellContents::Text("1__0"));
        assert_eq!(CellContents::classify("_1"), CellContents::Text("_1"));
    }

    #[test]
    fn test_literal_display_trims_only_integers() {
        assert_eq!(
            CellContents::classify("  12 ").literal_display().as_deref(),
            Some("12")
        );
        assert_eq!(
            CellContents::classify(" hi ").literal_display().as_deref(),
            Some(" hi ")
        );
        assert_eq!(CellContents::classify("=1").literal_display(), None);
    }

    #[test]
    fn test_parse_integer_overflow() {
        assert_eq!(parse_integer("+12"), Ok(12));
        assert_eq!(parse_integer("-1_000"), Ok(-1000));
        assert_eq!(
            parse_integer("99999999999999999999"),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_sources_return_owned_values() {
        let grid: Grid = DashMap::new();
        grid.insert("A1".to_string(), "=B1".to_string());
        assert_eq!(grid.raw("A1").as_deref(), Some("=B1"));
        assert_eq!(grid.raw("B1"), None);

        let mut map = HashMap::new();
        map.insert("A1".to_string(), "5".to_string());
        assert_eq!(map.raw("A1").as_deref(), Some("5"));
    }
}
