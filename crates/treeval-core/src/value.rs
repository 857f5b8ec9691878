//! Input value classification
//!
//! Every input position is classified once into a [`ValueKind`] and the
//! validator dispatches on that tag instead of probing the value shape
//! repeatedly.
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};
use std::fmt;

/// Shape of an input value, borrowed from the underlying JSON tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind<'a> {
    /// Associative structure (JSON object)
    Record(&'a Map<String, Value>),
    /// Ordered sequence (JSON array)
    Sequence(&'a [Value]),
    /// String, number or boolean
    Scalar(&'a Value),
    /// JSON null
    Null,
}

impl<'a> ValueKind<'a> {
    /// Classify a value
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => ValueKind::Record(map),
            Value::Array(items) => ValueKind::Sequence(items),
            Value::Null => ValueKind::Null,
            other => ValueKind::Scalar(other),
        }
    }

    /// Records and sequences are structured; scalars and null are not
    pub fn is_structured(&self) -> bool {
        matches!(self, ValueKind::Record(_) | ValueKind::Sequence(_))
    }

    /// Short name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Record(_) => "record",
            ValueKind::Sequence(_) => "sequence",
            ValueKind::Scalar(_) => "scalar",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification() {
        assert!(matches!(ValueKind::of(&json!({"a": 1})), ValueKind::Record(_)));
        assert!(matches!(ValueKind::of(&json!([1, 2])), ValueKind::Sequence(_)));
        assert!(matches!(ValueKind::of(&json!("text")), ValueKind::Scalar(_)));
        assert!(matches!(ValueKind::of(&json!(1.5)), ValueKind::Scalar(_)));
        assert!(matches!(ValueKind::of(&json!(false)), ValueKind::Scalar(_)));
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
    }

    #[test]
    fn test_structured() {
        assert!(ValueKind::of(&json!({})).is_structured());
        assert!(ValueKind::of(&json!([])).is_structured());
        assert!(!ValueKind::of(&json!(0)).is_structured());
        assert!(!ValueKind::of(&Value::Null).is_structured());
    }

    #[test]
    fn test_names() {
        assert_eq!(ValueKind::of(&json!([])).to_string(), "sequence");
        assert_eq!(ValueKind::of(&Value::Null).name(), "null");
    }
}
