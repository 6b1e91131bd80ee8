//! Decision predicate construction
//!
//! Folds a sequence of decision-level matcher clauses into one conjunctive
//! predicate evaluated against a single decision. Clauses are never applied
//! to separate decisions: `is permit, with resource` must hold on the same
//! decision, and an absent decision fails the predicate regardless of its
//! clauses.

use crate::decision::{Decision, Verdict};
use crate::error::{MatchError, Result};
use crate::matcher::{
    match_constraints, match_default, ConstraintKind, DecisionMatcher, DefaultMatcher,
    ExtendedMatcher,
};
use crate::value::Value;
use tracing::trace;

/// A conjunctive predicate over a single decision
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionPredicate {
    clauses: Vec<DecisionMatcher>,
}

impl DecisionPredicate {
    /// Build a predicate that is the conjunction of the given clauses.
    /// An empty clause list accepts any present decision.
    pub fn new(clauses: Vec<DecisionMatcher>) -> Self {
        Self { clauses }
    }

    /// Build a predicate from a pre-built decision-shape expectation.
    /// Lowers onto the same clause path as [`DecisionPredicate::new`], so
    /// both call sites share combination semantics.
    pub fn from_expectation(expectation: &DecisionExpectation) -> Self {
        let mut clauses = vec![DecisionMatcher::Is(expectation.verdict)];
        for obligation in &expectation.obligations {
            clauses.push(DecisionMatcher::HasConstraint {
                kind: ConstraintKind::Obligation,
                matcher: Some(ExtendedMatcher::Default(DefaultMatcher::Equals(
                    obligation.clone(),
                ))),
            });
        }
        for advice in &expectation.advice {
            clauses.push(DecisionMatcher::HasConstraint {
                kind: ConstraintKind::Advice,
                matcher: Some(ExtendedMatcher::Default(DefaultMatcher::Equals(
                    advice.clone(),
                ))),
            });
        }
        if let Some(resource) = &expectation.resource {
            clauses.push(DecisionMatcher::HasResource(Some(DefaultMatcher::Equals(
                resource.clone(),
            ))));
        }
        Self::new(clauses)
    }

    /// Evaluate the predicate. `None` always fails; otherwise every clause
    /// must hold on the same decision, checked left to right.
    pub fn evaluate(&self, decision: Option<&Decision>) -> Result<bool> {
        let Some(decision) = decision else {
            trace!("no decision present, predicate fails");
            return Ok(false);
        };
        for clause in &self.clauses {
            if !match_clause(decision, clause)? {
                trace!(clause = clause.kind(), "decision failed clause");
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// A fixed decision-shape expectation: expected verdict plus literal
/// obligation, advice, and resource values
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionExpectation {
    /// The expected verdict
    pub verdict: Verdict,
    /// Obligation values the decision must carry (each checked existentially)
    pub obligations: Vec<Value>,
    /// Advice values the decision must carry (each checked existentially)
    pub advice: Vec<Value>,
    /// The expected resource value, if one is expected at all
    pub resource: Option<Value>,
}

impl DecisionExpectation {
    /// Create an expectation for the given verdict with no constraints
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            obligations: Vec::new(),
            advice: Vec::new(),
            resource: None,
        }
    }

    /// Expect an obligation equal to the given value
    pub fn with_obligation(mut self, obligation: Value) -> Self {
        self.obligations.push(obligation);
        self
    }

    /// Expect an advice equal to the given value
    pub fn with_advice(mut self, advice: Value) -> Self {
        self.advice.push(advice);
        self
    }

    /// Expect a resource equal to the given value
    pub fn with_resource(mut self, resource: Value) -> Self {
        self.resource = Some(resource);
        self
    }
}

fn match_clause(decision: &Decision, clause: &DecisionMatcher) -> Result<bool> {
    match clause {
        DecisionMatcher::Any => Ok(true),
        DecisionMatcher::Is(expected) => Ok(decision.verdict == *expected),
        DecisionMatcher::HasConstraint { kind, matcher } => {
            let constraints = match kind {
                ConstraintKind::Obligation => &decision.obligations,
                ConstraintKind::Advice => &decision.advice,
            };
            if constraints.is_empty() {
                return Ok(false);
            }
            match matcher {
                Some(extended) => match_constraints(constraints, extended),
                None => Ok(true),
            }
        }
        DecisionMatcher::HasResource(matcher) => match matcher {
            None => Ok(!decision.resource.is_undefined()),
            Some(default) => {
                if decision.resource.is_undefined() {
                    return Ok(false);
                }
                match_default(&decision.resource, default)
            }
        },
        DecisionMatcher::Unsupported(kind) => {
            Err(MatchError::UnsupportedMatcherKind { kind: kind.clone() })
        }
    }
}
