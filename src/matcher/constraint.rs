//! Constraint-list matching
//!
//! Searches a decision's obligation or advice list for at least one value
//! satisfying an extended matcher. Exists-semantics: the search stops at the
//! first satisfying candidate. Contrast with node matching, where an object
//! body must be satisfied by every declared member.

use crate::error::Result;
use crate::matcher::node::match_value;
use crate::matcher::{DefaultMatcher, ExtendedMatcher};
use crate::value::Value;

/// True if at least one constraint in the list satisfies the matcher
pub fn match_constraints(constraints: &[Value], matcher: &ExtendedMatcher) -> Result<bool> {
    for candidate in constraints {
        if match_extended(candidate, matcher)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Evaluate a whole-value matcher: structural equality against a
/// pre-converted literal, or node-matcher delegation
pub fn match_default(value: &Value, matcher: &DefaultMatcher) -> Result<bool> {
    match matcher {
        DefaultMatcher::Equals(expected) => Ok(expected == value),
        DefaultMatcher::Matching(node_matcher) => match_value(value, node_matcher),
    }
}

fn match_extended(candidate: &Value, matcher: &ExtendedMatcher) -> Result<bool> {
    match matcher {
        ExtendedMatcher::Default(default) => match_default(candidate, default),
        ExtendedMatcher::KeyValue { key, matcher } => {
            let Value::Object(fields) = candidate else {
                return Ok(false);
            };
            let Some(field) = fields.get(key) else {
                return Ok(false);
            };
            match matcher {
                Some(node_matcher) => match_value(field, node_matcher),
                None => Ok(true),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{TextBody, ValueMatcher};
    use serde_json::json;

    fn constraints(json: serde_json::Value) -> Vec<Value> {
        match Value::from(json) {
            Value::Array(elements) => elements,
            other => vec![other],
        }
    }

    #[test]
    fn test_exists_semantics() {
        let list = constraints(json!([{"type": "log"}, {"type": "audit"}]));
        let matcher = ExtendedMatcher::KeyValue {
            key: "type".into(),
            matcher: Some(ValueMatcher::Text(Some(TextBody::Literal("audit".into())))),
        };
        assert!(match_constraints(&list, &matcher).unwrap());

        let absent = ExtendedMatcher::KeyValue {
            key: "type".into(),
            matcher: Some(ValueMatcher::Text(Some(TextBody::Literal("block".into())))),
        };
        assert!(!match_constraints(&list, &absent).unwrap());
    }

    #[test]
    fn test_key_presence_alone() {
        let list = constraints(json!([{"type": "log"}, {"level": 3}]));
        let matcher = ExtendedMatcher::KeyValue {
            key: "level".into(),
            matcher: None,
        };
        assert!(match_constraints(&list, &matcher).unwrap());

        let missing = ExtendedMatcher::KeyValue {
            key: "severity".into(),
            matcher: None,
        };
        assert!(!match_constraints(&list, &missing).unwrap());
    }

    #[test]
    fn test_non_object_candidates_are_skipped() {
        let list = constraints(json!(["log", 3, {"type": "log"}]));
        let matcher = ExtendedMatcher::KeyValue {
            key: "type".into(),
            matcher: None,
        };
        assert!(match_constraints(&list, &matcher).unwrap());
    }

    #[test]
    fn test_default_equals_is_structural() {
        let list = constraints(json!([{"type": "log", "level": 2}]));
        let matcher = ExtendedMatcher::Default(DefaultMatcher::Equals(Value::from(
            json!({"level": 2, "type": "log"}),
        )));
        assert!(match_constraints(&list, &matcher).unwrap());

        let partial =
            ExtendedMatcher::Default(DefaultMatcher::Equals(Value::from(json!({"type": "log"}))));
        assert!(!match_constraints(&list, &partial).unwrap());
    }

    #[test]
    fn test_default_matching_delegates_to_node_matcher() {
        let list = constraints(json!([{"type": "log", "level": 2}]));
        let matcher = ExtendedMatcher::Default(DefaultMatcher::Matching(ValueMatcher::Object(
            Some(vec![crate::matcher::ObjectMember::new(
                "type",
                ValueMatcher::Text(None),
            )]),
        )));
        assert!(match_constraints(&list, &matcher).unwrap());
    }

    #[test]
    fn test_empty_list_never_matches() {
        let matcher = ExtendedMatcher::KeyValue {
            key: "type".into(),
            matcher: None,
        };
        assert!(!match_constraints(&[], &matcher).unwrap());
    }

    #[test]
    fn test_nested_error_propagates() {
        let list = constraints(json!([{"type": "log"}]));
        let matcher = ExtendedMatcher::KeyValue {
            key: "type".into(),
            matcher: Some(ValueMatcher::Unsupported("mystery".into())),
        };
        assert!(match_constraints(&list, &matcher).is_err());
    }
}
