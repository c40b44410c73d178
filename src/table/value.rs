//! Atomic cell values

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute value
///
/// Values are totally ordered: booleans before integers before text, then
/// natural order within a variant. Non-integer numbers are kept as text so that
/// descriptor equality stays exact.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Value {
    /// Coerce a raw token into the narrowest matching variant
    ///
    /// Only canonical literals are coerced, so the value always displays as
    /// the original token and distinct tokens stay distinct values.
    pub fn parse(token: &str) -> Self {
        match token {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        match token.parse::<i64>() {
            Ok(n) if n.to_string() == token => Value::Int(n),
            _ => Value::Text(token.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
