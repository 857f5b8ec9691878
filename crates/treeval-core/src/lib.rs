//! Treeval Core - recursive schema-driven validation of tree-shaped data
//!
//! Given a value and a declarative schema, treeval produces a result tree
//! that mirrors the value and reports, at every leaf, which named
//! constraints passed or failed, instead of a single verdict.
//!
//! # Main Components
//!
//! - **Validator**: constraint and schema registries plus the three mutually
//!   recursive entry points `validate_object`, `validate_array` and
//!   `validate_scalar`
//! - **Schema model**: field maps and typed `object`/`array`/`scalar` nodes,
//!   built in code or converted from JSON documents
//! - **Result trees**: `false` for shape mismatches and unknown or missing
//!   fields, constraint outcome maps at the leaves
//! - **Error Handling**: configuration problems only, using `thiserror`
//!
//! # Example
//!
//! ```rust
//! use treeval_core::{Result, Validator};
//! use serde_json::{json, Value};
//!
//! fn example() -> Result<()> {
//!     let mut validator = Validator::new();
//!     validator.add_constraint("string", |value: &Value, _: Option<&Value>| value.is_string());
//!     validator.add_schema_value("address", &json!({
//!         "street": {"type": "scalar", "constraints": [["string"]]}
//!     }))?;
//!     validator.add_schema_value("user", &json!({
//!         "username": {"type": "scalar", "constraints": [["string"]]},
//!         "address": {"type": "object", "ref": "address"}
//!     }))?;
//!
//!     let result = validator.validate_object(&json!({"username": 7, "address": {}}), "user")?;
//!     assert_eq!(result.to_value(), json!({
//!         "username": {"string": false},
//!         "address": {"street": false}
//!     }));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod constraint;
pub mod diagnostics;
pub mod error;
pub mod result;
pub mod schema;
pub mod validator;
pub mod value;

// Re-export main types for convenience
pub use config::ValidatorConfig;
pub use constraint::{Constraint, ConstraintRef, SharedConstraint};
pub use diagnostics::{Diagnostics, LogDiagnostics, NoopDiagnostics};
pub use error::{Error, Result};
pub use result::ResultTree;
pub use schema::{ObjectSchema, Schema, SchemaNode, SchemaRef};
pub use validator::{ValidationContext, Validator, ValidatorBuilder};
pub use value::ValueKind;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
