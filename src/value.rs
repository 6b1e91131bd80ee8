//! Runtime value model
//!
//! A [`Value`] is an immutable tree over the JSON-like shapes a policy
//! decision can carry, plus an explicit `Undefined` marker for "no value at
//! all" (an absent resource). The engine only ever reads values; callers own
//! their lifetime.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;

/// A runtime data value under test
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value at all. Distinct from `Null`: a decision without a resource
    /// carries `Undefined`, not a null resource.
    #[default]
    Undefined,
    /// JSON null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Numeric value. Both values and matcher literals use binary `f64`, so
    /// exact equality compares one shared representation.
    Number(f64),
    /// Text value
    Text(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Mapping from string keys to values. Key order is not significant for
    /// matching.
    Object(HashMap<String, Value>),
}

impl Value {
    /// Create a text value
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// Create a numeric value
    pub fn number(number: f64) -> Self {
        Value::Number(number)
    }

    /// True if this is the undefined marker
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// True if this is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The numeric content, if this is a number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// The elements, if this is an array value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// The members, if this is an object value
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(b),
            JsonValue::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Null,
            },
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            // Undefined has no JSON shape of its own; null is the closest
            // wire form.
            Value::Undefined | Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Text(s) => JsonValue::String(s),
            Value::Array(elements) => {
                JsonValue::Array(elements.into_iter().map(JsonValue::from).collect())
            }
            Value::Object(members) => JsonValue::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Array(elements) => elements.serialize(serializer),
            Value::Object(members) => members.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        Ok(Value::from(json))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            other => {
                let json = JsonValue::from(other.clone());
                write!(f, "{json}")
            }
        }
    }
}
