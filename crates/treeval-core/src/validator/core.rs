//! Validation entry points
//!
//! `validate_object`, `validate_array` and `validate_scalar` recurse into each
//! other according to the schema node found at each position. Shape
//! mismatches become `false` in the result tree; registry and schema
//! problems abort the call with an [`Error`].
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use super::context::ValidationContext;
use super::Validator;
use crate::constraint::ConstraintRef;
use crate::error::{Error, Result};
use crate::result::ResultTree;
use crate::schema::{ObjectSchema, Schema, SchemaNode, SchemaRef};
use crate::value::ValueKind;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashSet;

impl Validator {
    /// Validate a record against a field map (inline or by identifier)
    ///
    /// Returns `false` when `value` is not a record. Otherwise every input key
    /// maps to its field result (or `false` when the schema does not declare
    /// it), followed by `false` for every declared key the input lacks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeval_core::{ObjectSchema, SchemaNode, Validator};
    /// use serde_json::json;
    ///
    /// let mut validator = Validator::new();
    /// validator
    ///     .add_schema("user", ObjectSchema::new().field("age", SchemaNode::any_scalar()))
    ///     .unwrap();
    ///
    /// let result = validator.validate_object(&json!({"age": 20, "name": "x"}), "user").unwrap();
    /// assert_eq!(result.to_value(), json!({"age": true, "name": false}));
    /// ```
    pub fn validate_object<R: Into<SchemaRef>>(&self, value: &Value, schema: R) -> Result<ResultTree> {
        self.object_at(value, &schema.into(), &ValidationContext::root())
    }

    /// Validate every element of a sequence against one element node
    ///
    /// Returns `false` when `value` is not a sequence.
    pub fn validate_array<R: Into<SchemaRef>>(&self, value: &Value, schema: R) -> Result<ResultTree> {
        self.array_at(value, &schema.into(), &ValidationContext::root())
    }

    /// Run constraints against a scalar in declaration order
    ///
    /// Returns `false` for records and sequences and `true` when `constraints`
    /// is empty; otherwise a mapping from constraint identifier to outcome.
    pub fn validate_scalar(&self, value: &Value, constraints: &[ConstraintRef]) -> Result<ResultTree> {
        self.scalar_at(value, constraints)
    }

    /// Validate against any schema, dispatching on the resolved schema kind
    ///
    /// A field map validates `value` as a record; a node validates it as the
    /// node's kind.
    pub fn validate<R: Into<SchemaRef>>(&self, value: &Value, schema: R) -> Result<ResultTree> {
        let reference = schema.into();
        let context = ValidationContext::root();
        match self.resolve_schema(&reference)? {
            Schema::Fields(fields) => match ValueKind::of(value) {
                ValueKind::Record(record) => self.fields_at(record, fields, &context),
                _ => Ok(ResultTree::MISMATCH),
            },
            Schema::Node(node) => self.node_at(value, node, &context),
        }
    }

    fn node_at(&self, value: &Value, node: &SchemaNode, context: &ValidationContext) -> Result<ResultTree> {
        match node {
            SchemaNode::Object(reference) => self.object_at(value, reference, context),
            SchemaNode::Array(reference) => self.array_at(value, reference, context),
            SchemaNode::Scalar(constraints) => self.scalar_at(value, constraints),
        }
    }

    fn object_at(&self, value: &Value, reference: &SchemaRef, context: &ValidationContext) -> Result<ResultTree> {
        let record = match ValueKind::of(value) {
            ValueKind::Record(record) => record,
            _ => return Ok(ResultTree::MISMATCH),
        };

        match self.resolve_schema(reference)? {
            Schema::Fields(fields) => self.fields_at(record, fields, context),
            Schema::Node(node) => Err(Error::invalid_type(
                &context.path,
                format!("{} node where a field map is expected", node.kind()),
            )),
        }
    }

    fn fields_at(
        &self,
        record: &Map<String, Value>,
        fields: &ObjectSchema,
        context: &ValidationContext,
    ) -> Result<ResultTree> {
        self.check_depth(context)?;

        let mut consumed: HashSet<&str> = HashSet::with_capacity(fields.len());
        let mut results = IndexMap::with_capacity(record.len());

        for (key, item) in record {
            let result = match fields.get(key) {
                Some(node) => {
                    consumed.insert(key.as_str());
                    self.node_at(item, node, &context.child(key))?
                }
                None => ResultTree::MISMATCH,
            };
            results.insert(key.clone(), result);
        }

        for missing in fields.keys().filter(|key| !consumed.contains(key)) {
            results.insert(missing.to_string(), ResultTree::MISMATCH);
        }

        Ok(ResultTree::Object(results))
    }

    fn array_at(&self, value: &Value, reference: &SchemaRef, context: &ValidationContext) -> Result<ResultTree> {
        let items = match ValueKind::of(value) {
            ValueKind::Sequence(items) => items,
            _ => return Ok(ResultTree::MISMATCH),
        };

        let element = match self.resolve_schema(reference)? {
            Schema::Node(node) => node,
            Schema::Fields(_) => {
                return Err(Error::invalid_type(
                    &context.path,
                    "field map where an element node is expected",
                ))
            }
        };

        self.check_depth(context)?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.node_at(item, element, &context.child_index(index)))
            .collect::<Result<Vec<_>>>()
            .map(ResultTree::Array)
    }

    fn scalar_at(&self, value: &Value, constraints: &[ConstraintRef]) -> Result<ResultTree> {
        if ValueKind::of(value).is_structured() {
            return Ok(ResultTree::MISMATCH);
        }
        if constraints.is_empty() {
            return Ok(ResultTree::Flag(true));
        }

        let mut outcomes = IndexMap::with_capacity(constraints.len());
        for reference in constraints {
            let constraint = self.resolve_constraint(&reference.id)?;
            outcomes.insert(
                reference.id.clone(),
                constraint.check(value, reference.options.as_ref()),
            );
        }
        Ok(ResultTree::Constraints(outcomes))
    }

    fn check_depth(&self, context: &ValidationContext) -> Result<()> {
        if self.config.exceeds_depth(context.depth) {
            return Err(Error::DepthLimitExceeded {
                path: context.path.clone(),
                limit: self.config.max_depth.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
