//! Cell identifiers as they appear inside formulas.
//!
//! Identifiers are opaque keys (`A1`, `total`, `q1.sales`): the engine never
//! splits them into column and row. Inside a formula, a reference is a
//! maximal run of word characters or dots that is not a plain integer.
//!
//! # Examples
//!
//! ```
//! use tally_engine::engine::is_referenceable;
//!
//! assert!(is_referenceable("A1"));
//! assert!(is_referenceable("q1.sales"));
//! assert!(!is_referenceable("42"));
//! assert!(!is_referenceable("A 1"));
//! ```

use regex::Regex;
use std::sync::OnceLock;

/// Matches the longest identifier-like run at the start of the input.
pub(crate) fn word_re() -> &'static Regex {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    WORD_RE.get_or_init(|| Regex::new(r"\A[\w.]+").expect("word token regex must compile"))
}

fn reference_re() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE
        .get_or_init(|| Regex::new(r"\A[\w.]+\z").expect("reference regex must compile"))
}

/// True when a word token is a decimal integer literal rather than a reference.
///
/// Digits may be grouped with single underscores (`1_000`), never leading,
/// trailing or doubled.
pub(crate) fn is_integer_word(word: &str) -> bool {
    !word.is_empty()
        && !word.starts_with('_')
        && !word.ends_with('_')
        && !word.contains("__")
        && word.bytes().all(|b| b.is_ascii_digit() || b == b'_')
}

/// Whether `id` can be written inside a formula and read back as a single
/// reference to the same cell.
pub fn is_referenceable(id: &str) -> bool {
    reference_re().is_match(id) && !is_integer_word(id)
}
