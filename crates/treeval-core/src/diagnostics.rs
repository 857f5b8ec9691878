//! Registry diagnostics
//!
//! The validator reports registry events through a [`Diagnostics`] sink
//! rather than writing to a global logger itself, so hosts can route or
//! silence them and tests can observe them.
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

/// Sink for registry events
pub trait Diagnostics: Send + Sync {
    /// A schema identifier was registered
    fn schema_registered(&self, _id: &str) {}

    /// A new constraint identifier was registered
    fn constraint_registered(&self, _id: &str) {}

    /// An existing constraint was replaced; `warn` is false when the
    /// validator was configured without overwrite warnings
    fn constraint_overwritten(&self, _id: &str, _warn: bool) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn schema_registered(&self, id: &str) {
        log::debug!("Registered schema '{}'", id);
    }

    fn constraint_registered(&self, id: &str) {
        log::debug!("Registered constraint '{}'", id);
    }

    fn constraint_overwritten(&self, id: &str, warn: bool) {
        if warn {
            log::warn!("Constraint with identifier '{}' will be overridden by new constraint", id);
        } else {
            log::debug!("Constraint '{}' overridden", id);
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {}
