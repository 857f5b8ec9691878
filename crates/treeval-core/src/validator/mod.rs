//! Recursive validation of records, sequences and scalars
//!
//! The validator is organized into focused modules:
//! - `context`: JSON path and depth tracking
//! - `registry`: constraint and schema registration and lookup
//! - `core`: the mutually recursive validation entry points
//! - `builder`: assembling a fully configured validator
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod context;
pub mod core;
pub mod registry;

pub use builder::ValidatorBuilder;
pub use context::ValidationContext;

use crate::config::ValidatorConfig;
use crate::constraint::SharedConstraint;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::schema::Schema;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Schema-driven validator holding the constraint and schema registries
///
/// Registration takes `&mut self` and validation `&self`, so a validator is
/// set up first and then shared (for instance behind an `Arc`) for
/// validation traffic.
pub struct Validator {
    pub(crate) constraints: IndexMap<String, SharedConstraint>,
    pub(crate) schemas: IndexMap<String, Schema>,
    pub(crate) config: ValidatorConfig,
    pub(crate) diagnostics: Arc<dyn Diagnostics>,
}

impl Validator {
    /// Create an empty validator with the default configuration
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create an empty validator with an explicit configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            constraints: IndexMap::new(),
            schemas: IndexMap::new(),
            config,
            diagnostics: Arc::new(LogDiagnostics),
        }
    }

    /// Replace the diagnostics sink
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Create a builder
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("constraints", &self.constraints.keys().collect::<Vec<_>>())
            .field("schemas", &self.schemas)
            .field("config", &self.config)
            .finish()
    }
}
