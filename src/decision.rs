//! Authorization decision record
//!
//! A [`Decision`] is the output of a policy evaluation under test: the
//! verdict, ordered obligation and advice constraint lists, and an optional
//! resource value. Decisions are produced by an external evaluation engine;
//! this crate only reads them.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of a policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Access is granted
    Permit,
    /// Access is refused
    Deny,
    /// Evaluation failed or produced conflicting results
    Indeterminate,
    /// No policy applied to the subscription
    NotApplicable,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Permit => "PERMIT",
            Verdict::Deny => "DENY",
            Verdict::Indeterminate => "INDETERMINATE",
            Verdict::NotApplicable => "NOT_APPLICABLE",
        };
        write!(f, "{name}")
    }
}

/// An authorization decision under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// The verdict
    pub verdict: Verdict,
    /// Obligation constraint values, in emission order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub obligations: Vec<Value>,
    /// Advice constraint values, in emission order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advice: Vec<Value>,
    /// The resource value, or `Value::Undefined` when the decision carries
    /// none
    #[serde(default, skip_serializing_if = "Value::is_undefined")]
    pub resource: Value,
}

impl Decision {
    /// Create a decision with the given verdict and no constraints
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            obligations: Vec::new(),
            advice: Vec::new(),
            resource: Value::Undefined,
        }
    }

    /// Append an obligation constraint
    pub fn with_obligation(mut self, obligation: Value) -> Self {
        self.obligations.push(obligation);
        self
    }

    /// Append an advice constraint
    pub fn with_advice(mut self, advice: Value) -> Self {
        self.advice.push(advice);
        self
    }

    /// Set the resource value
    pub fn with_resource(mut self, resource: Value) -> Self {
        self.resource = resource;
        self
    }
}
