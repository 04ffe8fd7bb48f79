use crate::field_path::{FieldPath, FieldPathError, MalformedSegmentPolicy};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single violation reported by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: FieldPath,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<FieldPath>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation issue keyed by its flattened path, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldError {
    pub key: String,
    pub message: String,
}

impl FieldError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn from_issue(
        issue: &ValidationIssue,
        policy: MalformedSegmentPolicy,
    ) -> Result<Self, FieldPathError> {
        Ok(Self {
            key: issue.path.flatten_with(policy)?,
            message: issue.message.clone(),
        })
    }
}

/// Outcome of parsing a value against an object schema.
///
/// Serializes as `{"value": ..., "errors": []}` or `{"errors": [...]}`. A
/// valid result carries no errors and an invalid one never carries a value;
/// a document without a `value` key always deserializes as `Invalid`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T> {
    Valid { value: T },
    Invalid { errors: Vec<FieldError> },
}

impl<T> ParseResult<T> {
    pub fn valid(value: T) -> Self {
        Self::Valid { value }
    }

    pub fn invalid(errors: Vec<FieldError>) -> Self {
        Self::Invalid { errors }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid { value } => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid { value } => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { errors } => errors,
        }
    }

    /// Field key to message. When a key has several errors the first one wins.
    pub fn error_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for error in self.errors() {
            map.entry(error.key.clone())
                .or_insert_with(|| error.message.clone());
        }
        map
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            Self::Valid { value } => ParseResult::Valid { value: f(value) },
            Self::Invalid { errors } => ParseResult::Invalid { errors },
        }
    }
}

impl<T: Serialize> Serialize for ParseResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid { value } => {
                let mut state = serializer.serialize_struct("ParseResult", 2)?;
                state.serialize_field("value", value)?;
                state.serialize_field("errors", &[] as &[FieldError])?;
                state.end()
            }
            Self::Invalid { errors } => {
                let mut state = serializer.serialize_struct("ParseResult", 1)?;
                state.serialize_field("errors", errors)?;
                state.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct InvalidShape {
    errors: Vec<FieldError>,
}

#[derive(Deserialize)]
struct ValidShape<T> {
    value: T,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ParseResultShape<T> {
    Invalid(InvalidShape),
    Valid(ValidShape<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ParseResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ParseResultShape::<T>::deserialize(deserializer)? {
            ParseResultShape::Invalid(InvalidShape { errors }) => Ok(Self::Invalid { errors }),
            ParseResultShape::Valid(ValidShape { errors, .. }) if !errors.is_empty() => Err(
                de::Error::custom("a parse result with a value cannot carry errors"),
            ),
            ParseResultShape::Valid(ValidShape { value, .. }) => Ok(Self::Valid { value }),
        }
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
