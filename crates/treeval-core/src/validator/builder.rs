//! Fluent construction of a fully registered validator
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use super::Validator;
use crate::config::ValidatorConfig;
use crate::constraint::{Constraint, SharedConstraint};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::schema::Schema;
use serde_json::Value;
use std::sync::Arc;

enum PendingSchema {
    Typed(Schema),
    Document(Value),
}

/// Builder for [`Validator`]
///
/// Registrations are replayed in order by [`ValidatorBuilder::build`], so the
/// same duplicate and overwrite rules apply as for direct registration.
///
/// ```rust
/// use treeval_core::Validator;
/// use serde_json::{json, Value};
///
/// let validator = Validator::builder()
///     .constraint("string", |value: &Value, _: Option<&Value>| value.is_string())
///     .schema_value("user", json!({
///         "username": {"type": "scalar", "constraints": [["string"]]}
///     }))
///     .build()
///     .unwrap();
///
/// let result = validator.validate_object(&json!({"username": "tim"}), "user").unwrap();
/// assert!(result.all_passed());
/// ```
#[derive(Default)]
pub struct ValidatorBuilder {
    config: ValidatorConfig,
    diagnostics: Option<Arc<dyn Diagnostics>>,
    constraints: Vec<(String, SharedConstraint)>,
    schemas: Vec<(String, PendingSchema)>,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn constraint<S, C>(mut self, id: S, constraint: C) -> Self
    where
        S: Into<String>,
        C: Constraint + 'static,
    {
        self.constraints.push((id.into(), Arc::new(constraint)));
        self
    }

    pub fn schema<S, T>(mut self, id: S, schema: T) -> Self
    where
        S: Into<String>,
        T: Into<Schema>,
    {
        self.schemas.push((id.into(), PendingSchema::Typed(schema.into())));
        self
    }

    /// Register an untyped schema document; it is converted by `build`
    pub fn schema_value<S: Into<String>>(mut self, id: S, document: Value) -> Self {
        self.schemas.push((id.into(), PendingSchema::Document(document)));
        self
    }

    /// Build the validator, failing on the first duplicate or malformed schema
    pub fn build(self) -> Result<Validator> {
        let mut validator = Validator::with_config(self.config);
        if let Some(diagnostics) = self.diagnostics {
            validator = validator.with_diagnostics(diagnostics);
        }

        for (id, constraint) in self.constraints {
            validator.add_shared_constraint(id, constraint);
        }
        for (id, pending) in self.schemas {
            match pending {
                PendingSchema::Typed(schema) => validator.add_schema(id, schema)?,
                PendingSchema::Document(document) => validator.add_schema_value(id, &document)?,
            }
        }

        Ok(validator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::RecordingDiagnostics;
    use crate::error::Error;
    use crate::schema::{ObjectSchema, SchemaNode};
    use serde_json::json;

    #[test]
    fn test_builder_registers_everything() {
        let validator = Validator::builder()
            .config(ValidatorConfig::default().with_max_depth(8))
            .constraint("dummy", |_: &Value, _: Option<&Value>| true)
            .schema("user", ObjectSchema::new().field("age", SchemaNode::scalar(["dummy"])))
            .schema_value("scalarType", json!({"type": "scalar"}))
            .build()
            .unwrap();

        assert_eq!(validator.config().max_depth, Some(8));
        assert!(validator.has_constraint("dummy"));
        assert_eq!(validator.schema_ids().collect::<Vec<_>>(), vec!["user", "scalarType"]);
    }

    #[test]
    fn test_builder_rejects_duplicate_schema() {
        let err = Validator::builder()
            .schema("user", ObjectSchema::new())
            .schema_value("user", json!({}))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::DuplicateSchema { id: "user".to_string() });
    }

    #[test]
    fn test_builder_rejects_malformed_document() {
        let err = Validator::builder()
            .schema_value("user", json!({"age": {"type": "number"}}))
            .build()
            .unwrap_err();
        assert_eq!(err.subject(), "$.age");
    }

    #[test]
    fn test_builder_uses_injected_diagnostics() {
        let sink = Arc::new(RecordingDiagnostics::default());
        Validator::builder()
            .diagnostics(sink.clone())
            .constraint("dummy", |_: &Value, _: Option<&Value>| true)
            .constraint("dummy", |_: &Value, _: Option<&Value>| false)
            .schema("user", ObjectSchema::new())
            .build()
            .unwrap();

        assert_eq!(
            sink.events(),
            vec!["constraint:dummy", "overwrite:dummy:true", "schema:user"]
        );
    }
}
