//! Scalar constraints and references to them
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A named, parameterizable predicate over a single scalar value
///
/// Any `Fn(&Value, Option<&Value>) -> bool` closure is a constraint, so most
/// callers never implement this trait by hand:
///
/// ```rust
/// use treeval_core::Validator;
/// use serde_json::Value;
///
/// let mut validator = Validator::new();
/// validator.add_constraint("string", |value: &Value, _: Option<&Value>| value.is_string());
/// ```
pub trait Constraint: Send + Sync {
    /// Evaluate the predicate; `options` is the second element of the
    /// constraint reference, when one was given
    fn check(&self, value: &Value, options: Option<&Value>) -> bool;
}

impl<F> Constraint for F
where
    F: Fn(&Value, Option<&Value>) -> bool + Send + Sync,
{
    fn check(&self, value: &Value, options: Option<&Value>) -> bool {
        self(value, options)
    }
}

/// Registry handle for a constraint
pub type SharedConstraint = Arc<dyn Constraint>;

/// A `(constraint-identifier, options?)` pair inside a scalar schema node
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRef {
    /// Identifier the constraint was registered under
    pub id: String,
    /// Options handed to the constraint on every call
    pub options: Option<Value>,
}

impl ConstraintRef {
    /// Reference a constraint without options
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            options: None,
        }
    }

    /// Reference a constraint with options
    pub fn with_options<S: Into<String>>(id: S, options: Value) -> Self {
        Self {
            id: id.into(),
            options: Some(options),
        }
    }

    /// Render as the `["id"]` / `["id", options]` document form
    pub fn to_value(&self) -> Value {
        match &self.options {
            Some(options) => Value::Array(vec![Value::String(self.id.clone()), options.clone()]),
            None => Value::Array(vec![Value::String(self.id.clone())]),
        }
    }
}

impl From<&str> for ConstraintRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConstraintRef {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ConstraintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.options {
            Some(options) => write!(f, "{}({})", self.id, options),
            None => write!(f, "{}", self.id),
        }
    }
}
