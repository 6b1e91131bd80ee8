//! Error types for the matching engine
//!
//! A structural mismatch (wrong value shape, missing key, length mismatch) is
//! never an error; every dispatcher reports it as `Ok(false)`. Errors are
//! reserved for contract violations: matcher nodes the upstream parser should
//! never have produced.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MatchError>;

/// Contract-violation errors raised by matcher dispatch
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A matcher node outside the supported variant set reached a dispatcher.
    /// This indicates a defect in the upstream parser or AST construction,
    /// not a data mismatch.
    #[error("unsupported matcher kind: {kind}")]
    UnsupportedMatcherKind {
        /// Name of the unrecognized matcher construct
        kind: String,
    },

    /// A literal operand on a matcher node failed to parse. The parser is
    /// expected to have validated literal syntax, so this is surfaced instead
    /// of being treated as a non-match.
    #[error("malformed {expected} literal: {literal:?}")]
    MalformedLiteral {
        /// The raw literal token as it appeared on the matcher node
        literal: String,
        /// What the literal was expected to be
        expected: &'static str,
    },
}
