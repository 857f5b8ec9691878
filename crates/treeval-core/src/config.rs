//! Validator configuration
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Nesting depth at which validation aborts; unbounded unless set
    pub max_depth: Option<usize>,
    /// Report constraint overwrites as warnings rather than debug events
    pub warn_on_overwrite: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            warn_on_overwrite: true,
        }
    }
}

impl ValidatorConfig {
    /// Create a configuration without a nesting limit
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            ..Self::default()
        }
    }

    /// Abort validation of data nested deeper than `max_depth`
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Report constraint overwrites at debug level only
    pub fn without_overwrite_warnings(mut self) -> Self {
        self.warn_on_overwrite = false;
        self
    }

    pub(crate) fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(false, |limit| depth > limit)
    }
}
