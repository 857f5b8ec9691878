//! Schema model for tree-shaped data
//!
//! - `node`: typed schema variants and builders
//! - `parse`: conversion from untyped `serde_json::Value` documents
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

pub mod node;
pub mod parse;

pub use node::{ObjectSchema, Schema, SchemaNode, SchemaRef};
