use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Runtime tag describing what shape of value a schema accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Any,
}

impl SchemaKind {
    /// Maps a foreign kind tag. Tags that name no known kind become `Any`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "object" => SchemaKind::Object,
            "array" => SchemaKind::Array,
            "string" => SchemaKind::String,
            "number" => SchemaKind::Number,
            "integer" => SchemaKind::Integer,
            "boolean" => SchemaKind::Boolean,
            "null" => SchemaKind::Null,
            _ => SchemaKind::Any,
        }
    }

    /// Reads the kind of a JSON Schema document from its top-level `type`.
    ///
    /// A document without `type` that declares `properties` is treated as an
    /// object schema. Union types (`["object", "null"]`) are `Any`.
    pub fn from_json_schema(document: &Value) -> Self {
        let Some(object) = document.as_object() else {
            return SchemaKind::Any;
        };
        match object.get("type") {
            Some(Value::String(tag)) => SchemaKind::from_tag(tag),
            Some(_) => SchemaKind::Any,
            None if object.contains_key("properties") => SchemaKind::Object,
            None => SchemaKind::Any,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Integer => "integer",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Null => "null",
            SchemaKind::Any => "any",
        }
    }
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "kind_test.rs"]
mod tests;
