//! Whitespace-run collapsing
//!
//! Used by the whitespace-insensitive string equality policy: every maximal
//! run of whitespace in the input becomes a single space. No trimming.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Global regex for whitespace collapsing
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// Collapse every maximal whitespace run in `text` to a single space
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUNS.replace_all(text, " ")
}
