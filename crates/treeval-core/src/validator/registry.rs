//! Constraint and schema registries
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use super::Validator;
use crate::constraint::{Constraint, SharedConstraint};
use crate::error::{Error, Result};
use crate::schema::{Schema, SchemaRef};
use serde_json::Value;
use std::sync::Arc;

impl Validator {
    /// Register a constraint under `id`
    ///
    /// An existing constraint with the same identifier is replaced and the
    /// replacement is reported to the diagnostics sink.
    pub fn add_constraint<S, C>(&mut self, id: S, constraint: C)
    where
        S: Into<String>,
        C: Constraint + 'static,
    {
        self.add_shared_constraint(id, Arc::new(constraint));
    }

    /// Register an already shared constraint under `id`
    pub fn add_shared_constraint<S: Into<String>>(&mut self, id: S, constraint: SharedConstraint) {
        let id = id.into();
        if self.constraints.contains_key(&id) {
            self.diagnostics
                .constraint_overwritten(&id, self.config.warn_on_overwrite);
        } else {
            self.diagnostics.constraint_registered(&id);
        }
        self.constraints.insert(id, constraint);
    }

    /// Register a schema under `id`
    ///
    /// Fails with [`Error::DuplicateSchema`] if the identifier is taken; the
    /// schema registered first stays in place.
    pub fn add_schema<S, T>(&mut self, id: S, schema: T) -> Result<()>
    where
        S: Into<String>,
        T: Into<Schema>,
    {
        let id = id.into();
        if self.schemas.contains_key(&id) {
            return Err(Error::DuplicateSchema { id });
        }
        self.diagnostics.schema_registered(&id);
        self.schemas.insert(id, schema.into());
        Ok(())
    }

    /// Convert an untyped schema document and register it under `id`
    pub fn add_schema_value<S: Into<String>>(&mut self, id: S, document: &Value) -> Result<()> {
        let id = id.into();
        if self.schemas.contains_key(&id) {
            return Err(Error::DuplicateSchema { id });
        }
        let schema = Schema::from_value(document)?;
        self.add_schema(id, schema)
    }

    /// Follow an identifier into the registry; inline schemas are returned as is
    pub fn resolve_schema<'a>(&'a self, reference: &'a SchemaRef) -> Result<&'a Schema> {
        match reference {
            SchemaRef::Id(id) => self.schemas.get(id).ok_or_else(|| Error::UnknownSchema { id: id.clone() }),
            SchemaRef::Inline(schema) => Ok(schema),
        }
    }

    /// Look up a registered constraint
    pub fn resolve_constraint(&self, id: &str) -> Result<&SharedConstraint> {
        self.constraints
            .get(id)
            .ok_or_else(|| Error::UnknownConstraint { id: id.to_string() })
    }

    /// The schema registered under `id`, if any
    pub fn schema(&self, id: &str) -> Option<&Schema> {
        self.schemas.get(id)
    }

    pub fn has_schema(&self, id: &str) -> bool {
        self.schemas.contains_key(id)
    }

    pub fn has_constraint(&self, id: &str) -> bool {
        self.constraints.contains_key(id)
    }

    /// Registered schema identifiers in registration order
    pub fn schema_ids(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Registered constraint identifiers in first-registration order
    pub fn constraint_ids(&self) -> impl Iterator<Item = &str> {
        self.constraints.keys().map(String::as_str)
    }
}
