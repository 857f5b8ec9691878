//! Position tracking while walking values and schema documents
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

/// Current JSON path and nesting depth of a validation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Current JSON path
    pub path: String,
    /// Number of records and sequences entered so far
    pub depth: usize,
}

impl ValidationContext {
    /// Context at the document root
    pub fn root() -> Self {
        Self {
            path: "$".to_string(),
            depth: 0,
        }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, path_segment.as_ref()),
            depth: self.depth + 1,
        }
    }

    /// Create a child context for array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
            depth: self.depth + 1,
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_context_child() {
        let context = ValidationContext::root();
        let child = context.child("test");
        assert_eq!(child.path, "$.test");
        assert_eq!(child.depth, 1);

        let grandchild = child.child("nested");
        assert_eq!(grandchild.path, "$.test.nested");
        assert_eq!(grandchild.depth, 2);
    }

    #[test]
    fn test_validation_context_child_index() {
        let context = ValidationContext::root().child("array");
        let indexed = context.child_index(0);
        assert_eq!(indexed.path, "$.array[0]");
        assert_eq!(indexed.depth, 2);
    }
}
