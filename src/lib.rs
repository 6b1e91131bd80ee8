//! Structural value-matching engine for authorization decision assertions
//!
//! This library is the evaluation core of a test-assertion DSL for
//! authorization decisions. Given a decision (verdict, obligations, advice,
//! optional resource) and a set of declarative matcher clauses produced by an
//! external parser, it builds a single conjunctive predicate and evaluates it
//! against one decision at a time.
//!
//! # Example
//!
//! ```
//! use decision_assert::matcher::{ConstraintKind, DecisionMatcher, ExtendedMatcher,
//!     TextBody, ValueMatcher};
//! use decision_assert::{Decision, DecisionPredicate, Value, Verdict};
//! use serde_json::json;
//!
//! // "expect decision is permit, with obligation containing key 'type' with
//! // value 'log'"
//! let predicate = DecisionPredicate::new(vec![
//!     DecisionMatcher::Is(Verdict::Permit),
//!     DecisionMatcher::HasConstraint {
//!         kind: ConstraintKind::Obligation,
//!         matcher: Some(ExtendedMatcher::KeyValue {
//!             key: "type".to_string(),
//!             matcher: Some(ValueMatcher::Text(Some(TextBody::Literal("log".to_string())))),
//!         }),
//!     },
//! ]);
//!
//! let decision = Decision::new(Verdict::Permit)
//!     .with_obligation(Value::from(json!({"type": "log"})));
//!
//! assert!(predicate.evaluate(Some(&decision)).unwrap());
//! assert!(!predicate.evaluate(None).unwrap());
//! ```
//!
//! Matching is pure and stateless: structural mismatches are `Ok(false)`,
//! while out-of-set matcher nodes and malformed literal operands surface as
//! [`MatchError`] contract violations.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use decision::{Decision, Verdict};
pub use error::{MatchError, Result};
pub use predicate::{DecisionExpectation, DecisionPredicate};
pub use value::Value;

/// Authorization decision record
pub mod decision;

/// Error types
pub mod error;

/// Matcher AST and matching engine
pub mod matcher;

/// Decision predicate construction
pub mod predicate;

/// Runtime value model
pub mod value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with default settings
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
