//! Typed attribute values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value of a single attribute.
///
/// The variant is part of the attribute's identity: an attribute carrying
/// `Text("1")` never satisfies a request for `Int(1)`, even under the same
/// name. Values are compared only for equality; there is no ordering or
/// coercion between variants.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AttributeValue {
    /// A boolean flag, e.g. `minified = true`.
    Bool(bool),
    /// An integer, e.g. `apiVersion = 8`.
    Int(i64),
    /// A free-form string, e.g. `artifactType = "jar"`.
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Int(i) => write!(f, "{i}"),
            AttributeValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(AttributeValue::Bool(true).to_string(), "true");
        assert_eq!(AttributeValue::Int(42).to_string(), "42");
        assert_eq!(AttributeValue::from("jar").to_string(), "jar");
    }

    #[test]
    fn cross_variant_inequality() {
        assert_ne!(AttributeValue::Int(1), AttributeValue::from("1"));
        assert_ne!(AttributeValue::Bool(true), AttributeValue::from("true"));
    }

    #[test]
    fn from_conversions() {
        assert_eq!(AttributeValue::from(true), AttributeValue::Bool(true));
        assert_eq!(AttributeValue::from(7i64), AttributeValue::Int(7));
        assert_eq!(
            AttributeValue::from("classes".to_string()),
            AttributeValue::Text("classes".to_string())
        );
    }

    #[test]
    fn serde_roundtrip() {
        let v = AttributeValue::from("directory");
        let json = serde_json::to_string(&v).unwrap();
        let back: AttributeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
