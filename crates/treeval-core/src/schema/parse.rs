//! Conversion of untyped schema documents into the typed model
//!
//! Schema documents follow the layout
//!
//! ```json
//! {
//!     "username": {"type": "scalar", "constraints": [["string", {"min": 2}]]},
//!     "address":  {"type": "object", "ref": "address"},
//!     "tags":     {"type": "array",  "ref": {"type": "scalar"}}
//! }
//! ```
//!
//! A document whose `"type"` member is a string is a single node; any other
//! object is a field map. Unrecognized or missing kinds are reported as
//! [`Error::InvalidSchemaType`] naming the path of the offending key.
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use super::node::{ObjectSchema, Schema, SchemaNode, SchemaRef};
use crate::constraint::ConstraintRef;
use crate::error::{Error, Result};
use crate::validator::context::ValidationContext;
use crate::value::ValueKind;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

impl Schema {
    /// Convert an untyped schema document
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeval_core::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::from_value(&json!({
    ///     "age": {"type": "scalar", "constraints": []}
    /// })).unwrap();
    /// assert_eq!(schema.kind(), "field map");
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        parse_schema(value, &ValidationContext::root())
    }
}

impl SchemaNode {
    /// Convert an untyped node document (`{"type": ..}`)
    pub fn from_value(value: &Value) -> Result<Self> {
        parse_node(value, &ValidationContext::root())
    }
}

impl SchemaRef {
    /// A string becomes an identifier, an object an inline schema
    pub fn from_value(value: &Value) -> Result<Self> {
        parse_ref(Some(value), &ValidationContext::root())
    }
}

impl TryFrom<&Value> for Schema {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Schema::from_value(value)
    }
}

impl TryFrom<&Value> for SchemaRef {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        SchemaRef::from_value(value)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Schema::from_value(&value).map_err(de::Error::custom)
    }
}

fn parse_schema(value: &Value, context: &ValidationContext) -> Result<Schema> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::malformed(
                &context.path,
                format!("expected a field map or a schema node, found {}", ValueKind::of(other)),
            ))
        }
    };

    if matches!(map.get("type"), Some(Value::String(_))) {
        return parse_node_map(map, context).map(Schema::Node);
    }

    let mut fields = ObjectSchema::new();
    for (name, entry) in map {
        fields.insert(name.as_str(), parse_node(entry, &context.child(name))?);
    }
    Ok(Schema::Fields(fields))
}

fn parse_node(value: &Value, context: &ValidationContext) -> Result<SchemaNode> {
    match value {
        Value::Object(map) => parse_node_map(map, context),
        other => Err(Error::invalid_type(&context.path, ValueKind::of(other).name())),
    }
}

fn parse_node_map(map: &Map<String, Value>, context: &ValidationContext) -> Result<SchemaNode> {
    match map.get("type") {
        Some(Value::String(kind)) => match kind.as_str() {
            "object" => {
                let reference = parse_ref(map.get("ref"), &context.child("ref"))?;
                if let SchemaRef::Inline(Schema::Node(node)) = &reference {
                    return Err(Error::invalid_type(
                        context.child("ref").path,
                        format!("{} node where a field map is expected", node.kind()),
                    ));
                }
                Ok(SchemaNode::Object(Box::new(reference)))
            }
            "array" => {
                let reference = parse_ref(map.get("ref"), &context.child("ref"))?;
                if let SchemaRef::Inline(Schema::Fields(_)) = &reference {
                    return Err(Error::invalid_type(
                        context.child("ref").path,
                        "field map where an element node is expected",
                    ));
                }
                Ok(SchemaNode::Array(Box::new(reference)))
            }
            "scalar" => parse_constraints(map.get("constraints"), &context.child("constraints"))
                .map(SchemaNode::Scalar),
            other => Err(Error::invalid_type(&context.path, format!("\"{}\"", other))),
        },
        Some(other) => Err(Error::invalid_type(&context.path, other.to_string())),
        None => Err(Error::invalid_type(&context.path, "no type")),
    }
}

fn parse_ref(value: Option<&Value>, context: &ValidationContext) -> Result<SchemaRef> {
    match value {
        Some(Value::String(id)) => Ok(SchemaRef::Id(id.clone())),
        Some(inline @ Value::Object(_)) => parse_schema(inline, context).map(SchemaRef::Inline),
        Some(other) => Err(Error::malformed(
            &context.path,
            format!("expected a schema identifier or an inline schema, found {}", ValueKind::of(other)),
        )),
        None => Err(Error::malformed(&context.path, "missing schema reference")),
    }
}

// Absent or null constraint lists mean "no constraints".
fn parse_constraints(value: Option<&Value>, context: &ValidationContext) -> Result<Vec<ConstraintRef>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_constraint_ref(entry, &context.child_index(index)))
            .collect(),
        Some(other) => Err(Error::malformed(
            &context.path,
            format!("expected a list of constraints, found {}", ValueKind::of(other)),
        )),
    }
}

fn parse_constraint_ref(value: &Value, context: &ValidationContext) -> Result<ConstraintRef> {
    match value.as_array().map(Vec::as_slice) {
        Some([Value::String(id)]) => Ok(ConstraintRef::new(id.as_str())),
        // Elements after the options are ignored.
        Some([Value::String(id), options, ..]) => {
            Ok(ConstraintRef::with_options(id.as_str(), options.clone()))
        }
        _ => Err(Error::malformed(
            &context.path,
            "expected [identifier] or [identifier, options]",
        )),
    }
}
