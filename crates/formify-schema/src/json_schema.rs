use crate::format::{decode_document, DecodeError, DocumentFormat};
use crate::kind::SchemaKind;
use crate::schema::{SafeParse, Schema};
use formify_core::{FieldPath, FieldPathSegment, ValidationIssue};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use jsonschema::error::ValidationErrorKind;
use jsonschema::JSONSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

#[derive(Debug, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("schema document decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("schema compile failed: {0}")]
    Compile(String),
}

/// A JSON Schema document compiled with `jsonschema`, producing `T` on
/// success.
///
/// The instance is deserialized into `T` once it satisfies the document; a
/// value the document accepts but `T` cannot represent fails with a single
/// issue at the root path.
pub struct JsonObjectSchema<T = Value> {
    document: Value,
    kind: SchemaKind,
    compiled: JSONSchema,
    output: PhantomData<fn() -> T>,
}

impl<T> JsonObjectSchema<T> {
    pub fn new(document: Value) -> Result<Self, SchemaLoadError> {
        let compiled = JSONSchema::options()
            .compile(&document)
            .map_err(|err| SchemaLoadError::Compile(err.to_string()))?;
        Ok(Self {
            kind: SchemaKind::from_json_schema(&document),
            document,
            compiled,
            output: PhantomData,
        })
    }

    pub fn from_str_with_format(input: &str, format: DocumentFormat) -> Result<Self, SchemaLoadError> {
        let document: Value = decode_document(input, format)?;
        Self::new(document)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    fn collect_issues(&self, instance: &Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if let Err(errors) = self.compiled.validate(instance) {
            for error in errors {
                let mut field_path =
                    json_pointer_to_field_path(error.instance_path.to_string().as_str(), instance);
                let message = match &error.kind {
                    ValidationErrorKind::Required {
                        property: Value::String(property),
                    } => {
                        field_path.push_key(property.as_str());
                        "required".to_string()
                    }
                    _ => error.to_string(),
                };
                issues.push(ValidationIssue::new(field_path, message));
            }
        }
        issues
    }
}

impl<T: DeserializeOwned> JsonObjectSchema<T> {
    pub fn safe_parse(&self, instance: &Value) -> SafeParse<T> {
        let issues = self.collect_issues(instance);
        if !issues.is_empty() {
            return SafeParse::Failure(issues);
        }
        match T::deserialize(instance) {
            Ok(output) => SafeParse::Success(output),
            Err(err) => SafeParse::Failure(vec![ValidationIssue::new(
                FieldPath::root(),
                format!("value does not match the output type: {err}"),
            )]),
        }
    }
}

impl<T> std::str::FromStr for JsonObjectSchema<T> {
    type Err = SchemaLoadError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_format(input, DocumentFormat::Auto)
    }
}

impl<T> Debug for JsonObjectSchema<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonObjectSchema")
            .field("kind", &self.kind)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl<T: DeserializeOwned> Schema for JsonObjectSchema<T> {
    type Output = T;

    fn kind(&self) -> SchemaKind {
        self.kind
    }

    fn safe_parse_async<'a>(&'a self, value: &'a Value) -> LocalBoxFuture<'a, SafeParse<T>> {
        async move { self.safe_parse(value) }.boxed_local()
    }
}

/// Converts an instance JSON pointer into a field path, using the instance to
/// tell array indices from object keys that happen to be numeric.
fn json_pointer_to_field_path(pointer: &str, instance: &Value) -> FieldPath {
    if pointer.is_empty() || pointer == "/" {
        return FieldPath::root();
    }

    let mut segments = Vec::new();
    let mut current = Some(instance);
    for raw_segment in pointer.trim_start_matches('/').split('/') {
        if raw_segment.is_empty() {
            continue;
        }
        let decoded = raw_segment.replace("~1", "/").replace("~0", "~");
        let segment = match (current, decoded.parse::<usize>()) {
            (Some(Value::Array(_)), Ok(index)) => FieldPathSegment::Index(index),
            (Some(Value::Object(_)), _) => FieldPathSegment::Key(decoded.clone()),
            (_, Ok(index)) => FieldPathSegment::Index(index),
            (_, Err(_)) => FieldPathSegment::Key(decoded.clone()),
        };
        current = match (&segment, current) {
            (FieldPathSegment::Index(index), Some(Value::Array(items))) => items.get(*index),
            (FieldPathSegment::Key(key), Some(Value::Object(map))) => map.get(key),
            _ => None,
        };
        segments.push(segment);
    }
    FieldPath::from_segments(segments)
}

#[cfg(test)]
#[path = "json_schema_test.rs"]
mod tests;
