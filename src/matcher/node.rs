//! Node matching
//!
//! The recursive backbone of the engine: co-traversal of a value tree and a
//! matcher tree. Every arm first gates on the value's type tag, then checks
//! content. Arrays match on exact arity and position; objects match on a
//! declared subset of keys. That asymmetry is intentional.

use crate::error::{MatchError, Result};
use crate::matcher::string::match_text_body;
use crate::matcher::ValueMatcher;
use crate::value::Value;

/// Evaluate a value matcher against a runtime value
pub fn match_value(value: &Value, matcher: &ValueMatcher) -> Result<bool> {
    match matcher {
        ValueMatcher::Null => Ok(matches!(value, Value::Null | Value::Undefined)),
        ValueMatcher::Text(body) => {
            let Value::Text(text) = value else {
                return Ok(false);
            };
            match body {
                Some(body) => match_text_body(Some(text), body),
                None => Ok(true),
            }
        }
        ValueMatcher::Number(literal) => {
            let Value::Number(number) = value else {
                return Ok(false);
            };
            match literal {
                Some(token) => Ok(parse_number_literal(token)? == *number),
                None => Ok(true),
            }
        }
        ValueMatcher::Boolean(literal) => {
            let Value::Boolean(boolean) = value else {
                return Ok(false);
            };
            match literal {
                Some(expected) => Ok(expected == boolean),
                None => Ok(true),
            }
        }
        ValueMatcher::Array(element_matchers) => {
            let Value::Array(elements) = value else {
                return Ok(false);
            };
            let Some(element_matchers) = element_matchers else {
                return Ok(true);
            };
            if elements.len() != element_matchers.len() {
                return Ok(false);
            }
            for (element, element_matcher) in elements.iter().zip(element_matchers) {
                if !match_value(element, element_matcher)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        ValueMatcher::Object(members) => {
            let Value::Object(fields) = value else {
                return Ok(false);
            };
            let Some(members) = members else {
                return Ok(true);
            };
            for member in members {
                let Some(field) = fields.get(&member.key) else {
                    return Ok(false);
                };
                if !match_value(field, &member.matcher)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        ValueMatcher::Unsupported(kind) => {
            Err(MatchError::UnsupportedMatcherKind { kind: kind.clone() })
        }
    }
}

fn parse_number_literal(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| MatchError::MalformedLiteral {
            literal: token.to_string(),
            expected: "number",
        })
}
