//! Matcher AST and matching engine
//!
//! The matcher AST is produced by an external test-script parser; this module
//! owns its shape and the dispatchers that evaluate it against runtime
//! values. Each dispatcher-facing enum carries an `Unsupported` variant for
//! grammar constructs the parser may emit that this engine does not know;
//! dispatching on one is a contract violation, never a silent non-match.

use crate::decision::Verdict;
use crate::value::Value;

mod constraint;
mod node;
mod string;
mod whitespace;

pub use constraint::{match_constraints, match_default};
pub use node::match_value;
pub use string::{match_text, match_text_body};
pub use whitespace::collapse_whitespace;

/// Matcher for a single runtime value node
#[derive(Debug, Clone, PartialEq)]
pub enum ValueMatcher {
    /// Matches null, and absence-of-value (undefined) as equivalent to null
    Null,
    /// Matches text values. Without a body this is a coarse "is text" check.
    Text(Option<TextBody>),
    /// Matches number values. The payload is the raw numeric literal token;
    /// without one this is a coarse "is number" check. Literals are parsed as
    /// binary `f64` and compared exactly, matching the value representation.
    Number(Option<String>),
    /// Matches boolean values, optionally against a literal
    Boolean(Option<bool>),
    /// Matches array values. With a body, arity must match exactly and
    /// elements are matched pairwise by position.
    Array(Option<Vec<ValueMatcher>>),
    /// Matches object values. With a body, every declared member must be
    /// present and match; extra keys in the value are permitted.
    Object(Option<Vec<ObjectMember>>),
    /// An out-of-set node injected by the upstream parser. Dispatching on it
    /// fails with [`MatchError::UnsupportedMatcherKind`](crate::MatchError).
    Unsupported(String),
}

/// Body of a text matcher: either a bare literal compared for equality, or a
/// string-policy sub-matcher
#[derive(Debug, Clone, PartialEq)]
pub enum TextBody {
    /// Plain literal equality (the literal is already unquoted)
    Literal(String),
    /// Delegation to the string-policy family
    Matcher(StringMatcher),
}

/// A declared member of an object matcher
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMember {
    /// Key that must be present in the matched object
    pub key: String,
    /// Matcher for the value at that key
    pub matcher: ValueMatcher,
}

impl ObjectMember {
    /// Create an object member
    pub fn new(key: impl Into<String>, matcher: ValueMatcher) -> Self {
        Self {
            key: key.into(),
            matcher,
        }
    }
}

/// The family of string-comparison policies
#[derive(Debug, Clone, PartialEq)]
pub enum StringMatcher {
    /// Exact content equality
    Equals(String),
    /// The logical absence of text (distinct from empty text)
    IsNull,
    /// Empty or all-whitespace text
    IsBlank,
    /// Zero-length text
    IsEmpty,
    /// Absent or zero-length text
    IsNullOrEmpty,
    /// Absent, empty, or all-whitespace text
    IsNullOrBlank,
    /// Equality after collapsing every maximal whitespace run in the input
    /// to a single space. The expected literal itself is compared verbatim.
    EqualsIgnoringWhitespace(String),
    /// Case-insensitive equality using the locale-independent Unicode fold
    EqualsIgnoringCase(String),
    /// Full-string regular expression match, anchored at both ends
    MatchesRegex(String),
    /// Prefix check
    StartsWith {
        /// The expected prefix
        prefix: String,
        /// Lower-case both operands before comparing
        case_insensitive: bool,
    },
    /// Suffix check
    EndsWith {
        /// The expected suffix
        suffix: String,
        /// Lower-case both operands before comparing
        case_insensitive: bool,
    },
    /// Substring check
    Contains {
        /// The expected substring
        needle: String,
        /// Lower-case both operands before comparing
        case_insensitive: bool,
    },
    /// Every substring must occur, each strictly after the end of the
    /// previous match
    ContainsInOrder(Vec<String>),
    /// Exact character-count equality. The payload is the raw non-negative
    /// integer literal token.
    HasLength(String),
    /// An out-of-set policy injected by the upstream parser
    Unsupported(String),
}

/// Matcher applied to a whole value: exact equality against a pre-converted
/// literal, or delegation to a [`ValueMatcher`]
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultMatcher {
    /// Structural equality against a literal already converted to a value by
    /// the external `convert` collaborator
    Equals(Value),
    /// Delegation to the node matcher
    Matching(ValueMatcher),
}

/// Matcher applied existentially across a list of constraint values
#[derive(Debug, Clone, PartialEq)]
pub enum ExtendedMatcher {
    /// A whole-value matcher any candidate may satisfy
    Default(DefaultMatcher),
    /// Candidate must be an object containing `key`; with a nested matcher,
    /// the value at that key must satisfy it, otherwise presence suffices
    KeyValue {
        /// Key that must be present
        key: String,
        /// Optional matcher for the value at that key
        matcher: Option<ValueMatcher>,
    },
}

/// Which constraint list of a decision a matcher selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The obligations list
    Obligation,
    /// The advice list
    Advice,
}

/// A decision-level matcher clause
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionMatcher {
    /// Matches any present decision
    Any,
    /// Matches decisions with the expected verdict
    Is(Verdict),
    /// Matches decisions whose selected constraint list is non-empty and,
    /// with a matcher, contains at least one satisfying constraint
    HasConstraint {
        /// Whether obligations or advice are selected
        kind: ConstraintKind,
        /// Optional existential matcher over the selected list
        matcher: Option<ExtendedMatcher>,
    },
    /// Matches decisions carrying a resource and, with a matcher, whose
    /// resource satisfies it
    HasResource(Option<DefaultMatcher>),
    /// An out-of-set clause injected by the upstream parser
    Unsupported(String),
}

impl DecisionMatcher {
    /// Short name of this clause, for diagnostics
    pub fn kind(&self) -> &str {
        match self {
            DecisionMatcher::Any => "any",
            DecisionMatcher::Is(_) => "is",
            DecisionMatcher::HasConstraint {
                kind: ConstraintKind::Obligation,
                ..
            } => "with obligation",
            DecisionMatcher::HasConstraint {
                kind: ConstraintKind::Advice,
                ..
            } => "with advice",
            DecisionMatcher::HasResource(_) => "with resource",
            DecisionMatcher::Unsupported(kind) => kind,
        }
    }
}
