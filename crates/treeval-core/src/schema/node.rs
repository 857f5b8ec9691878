//! Typed schema model
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use crate::constraint::ConstraintRef;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A registered or inline schema
///
/// Object validation consumes a field map; array validation consumes a single
/// node describing every element. Both live in the same registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Field name to node mapping, the schema of a record
    Fields(ObjectSchema),
    /// A single typed node
    Node(SchemaNode),
}

impl Schema {
    /// Kind name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Schema::Fields(_) => "field map",
            Schema::Node(node) => node.kind(),
        }
    }

    /// Render back into the untyped document form
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Fields(fields) => fields.to_value(),
            Schema::Node(node) => node.to_value(),
        }
    }
}

impl From<ObjectSchema> for Schema {
    fn from(fields: ObjectSchema) -> Self {
        Schema::Fields(fields)
    }
}

impl From<SchemaNode> for Schema {
    fn from(node: SchemaNode) -> Self {
        Schema::Node(node)
    }
}

/// Declared fields of a record, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    fields: IndexMap<String, SchemaNode>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, replacing an earlier declaration of the same name
    pub fn field<S: Into<String>>(mut self, name: S, node: SchemaNode) -> Self {
        self.insert(name, node);
        self
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, node: SchemaNode) -> Option<SchemaNode> {
        self.fields.insert(name.into(), node)
    }

    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, node)| (name.clone(), node.to_value()))
            .collect();
        Value::Object(map)
    }
}

impl<S: Into<String>> FromIterator<(S, SchemaNode)> for ObjectSchema {
    fn from_iter<I: IntoIterator<Item = (S, SchemaNode)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(name, node)| (name.into(), node)).collect(),
        }
    }
}

/// Expected shape of one value position
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A record; the reference resolves to a field map
    Object(Box<SchemaRef>),
    /// A sequence; the reference resolves to the node every element must match
    Array(Box<SchemaRef>),
    /// A scalar checked against constraints in declaration order
    Scalar(Vec<ConstraintRef>),
}

impl SchemaNode {
    pub fn object<R: Into<SchemaRef>>(reference: R) -> Self {
        SchemaNode::Object(Box::new(reference.into()))
    }

    pub fn array<R: Into<SchemaRef>>(element: R) -> Self {
        SchemaNode::Array(Box::new(element.into()))
    }

    pub fn scalar<I, C>(constraints: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ConstraintRef>,
    {
        SchemaNode::Scalar(constraints.into_iter().map(Into::into).collect())
    }

    /// A scalar node without constraints, valid for any scalar
    pub fn any_scalar() -> Self {
        SchemaNode::Scalar(Vec::new())
    }

    /// The document tag of this node
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Object(_) => "object",
            SchemaNode::Array(_) => "array",
            SchemaNode::Scalar(_) => "scalar",
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(self.kind().to_string()));
        match self {
            SchemaNode::Object(reference) | SchemaNode::Array(reference) => {
                map.insert("ref".to_string(), reference.to_value());
            }
            SchemaNode::Scalar(constraints) => {
                map.insert(
                    "constraints".to_string(),
                    Value::Array(constraints.iter().map(ConstraintRef::to_value).collect()),
                );
            }
        }
        Value::Object(map)
    }
}

/// Either a registered schema identifier or an inline schema
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaRef {
    /// Looked up in the registry when validation reaches it
    Id(String),
    Inline(Schema),
}

impl SchemaRef {
    pub fn id<S: Into<String>>(id: S) -> Self {
        SchemaRef::Id(id.into())
    }

    pub fn to_value(&self) -> Value {
        match self {
            SchemaRef::Id(id) => Value::String(id.clone()),
            SchemaRef::Inline(schema) => schema.to_value(),
        }
    }
}

impl From<&str> for SchemaRef {
    fn from(id: &str) -> Self {
        SchemaRef::Id(id.to_string())
    }
}

impl From<String> for SchemaRef {
    fn from(id: String) -> Self {
        SchemaRef::Id(id)
    }
}

impl From<Schema> for SchemaRef {
    fn from(schema: Schema) -> Self {
        SchemaRef::Inline(schema)
    }
}

impl From<ObjectSchema> for SchemaRef {
    fn from(fields: ObjectSchema) -> Self {
        SchemaRef::Inline(Schema::Fields(fields))
    }
}

impl From<SchemaNode> for SchemaRef {
    fn from(node: SchemaNode) -> Self {
        SchemaRef::Inline(Schema::Node(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_schema_keeps_declaration_order() {
        let schema = ObjectSchema::new()
            .field("username", SchemaNode::scalar(["string"]))
            .field("age", SchemaNode::any_scalar())
            .field("address", SchemaNode::object("address"));

        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["username", "age", "address"]);
        assert_eq!(schema.len(), 3);
        assert!(schema.contains("age"));
        assert!(!schema.contains("name"));
    }

    #[test]
    fn test_node_document_form() {
        let node = SchemaNode::array(SchemaNode::scalar([ConstraintRef::with_options(
            "string",
            json!({}),
        )]));

        assert_eq!(
            node.to_value(),
            json!({
                "type": "array",
                "ref": {"type": "scalar", "constraints": [["string", {}]]}
            })
        );
    }

    #[test]
    fn test_fields_document_form() {
        let schema: Schema = ObjectSchema::new()
            .field("address", SchemaNode::object("address"))
            .into();

        assert_eq!(schema.kind(), "field map");
        assert_eq!(
            schema.to_value(),
            json!({"address": {"type": "object", "ref": "address"}})
        );
    }

    #[test]
    fn test_schema_ref_conversions() {
        assert_eq!(SchemaRef::from("user"), SchemaRef::Id("user".to_string()));
        assert!(matches!(
            SchemaRef::from(SchemaNode::any_scalar()),
            SchemaRef::Inline(Schema::Node(SchemaNode::Scalar(_)))
        ));
        assert!(matches!(
            SchemaRef::from(ObjectSchema::new()),
            SchemaRef::Inline(Schema::Fields(_))
        ));
    }
}
