//! Validation result trees
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Output of a validation call, mirroring the shape of the input
///
/// Serializes to plain JSON: `false`/`true`, `{"constraint": bool}`, nested
/// objects and arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultTree {
    /// `false` for a shape mismatch, unknown or missing field; `true` for a
    /// scalar without constraints
    Flag(bool),
    /// Per-constraint outcome of a scalar, keyed by constraint identifier
    Constraints(IndexMap<String, bool>),
    /// Per-field results of a record
    Object(IndexMap<String, ResultTree>),
    /// Per-element results of a sequence
    Array(Vec<ResultTree>),
}

impl ResultTree {
    /// The "no matching schema / wrong shape" marker
    pub const MISMATCH: ResultTree = ResultTree::Flag(false);

    /// True when this position is the literal `false` marker
    pub fn is_false(&self) -> bool {
        matches!(self, ResultTree::Flag(false))
    }

    /// True when every leaf and every constraint outcome is `true`
    ///
    /// Empty records and sequences count as passed.
    pub fn all_passed(&self) -> bool {
        match self {
            ResultTree::Flag(flag) => *flag,
            ResultTree::Constraints(outcomes) => outcomes.values().all(|passed| *passed),
            ResultTree::Object(fields) => fields.values().all(ResultTree::all_passed),
            ResultTree::Array(items) => items.iter().all(ResultTree::all_passed),
        }
    }

    /// JSON paths of every failing leaf, in result order
    ///
    /// A failed constraint is reported as `<path>:<constraint>`.
    pub fn failures(&self) -> Vec<String> {
        let mut failures = Vec::new();
        self.collect_failures("$", &mut failures);
        failures
    }

    fn collect_failures(&self, path: &str, failures: &mut Vec<String>) {
        match self {
            ResultTree::Flag(false) => failures.push(path.to_string()),
            ResultTree::Flag(true) => {}
            ResultTree::Constraints(outcomes) => failures.extend(
                outcomes
                    .iter()
                    .filter(|(_, passed)| !**passed)
                    .map(|(id, _)| format!("{}:{}", path, id)),
            ),
            ResultTree::Object(fields) => {
                for (name, tree) in fields {
                    tree.collect_failures(&format!("{}.{}", path, name), failures);
                }
            }
            ResultTree::Array(items) => {
                for (index, tree) in items.iter().enumerate() {
                    tree.collect_failures(&format!("{}[{}]", path, index), failures);
                }
            }
        }
    }

    /// Render as a `serde_json::Value`
    pub fn to_value(&self) -> Value {
        match self {
            ResultTree::Flag(flag) => Value::Bool(*flag),
            ResultTree::Constraints(outcomes) => Value::Object(
                outcomes
                    .iter()
                    .map(|(id, passed)| (id.clone(), Value::Bool(*passed)))
                    .collect(),
            ),
            ResultTree::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, tree)| (name.clone(), tree.to_value()))
                    .collect(),
            ),
            ResultTree::Array(items) => Value::Array(items.iter().map(ResultTree::to_value).collect()),
        }
    }
}

impl From<bool> for ResultTree {
    fn from(flag: bool) -> Self {
        ResultTree::Flag(flag)
    }
}

impl PartialEq<bool> for ResultTree {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, ResultTree::Flag(flag) if flag == other)
    }
}
