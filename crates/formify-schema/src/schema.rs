use crate::kind::SchemaKind;
use formify_core::ValidationIssue;
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::rc::Rc;

/// Result of a safe parse: failure is data, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SafeParse<T> {
    Success(T),
    Failure(Vec<ValidationIssue>),
}

/// A validator that can check an untrusted value without failing.
pub trait Schema {
    type Output;

    /// The shape this schema accepts. Read on every adapter call, so it may
    /// change over the schema's lifetime.
    fn kind(&self) -> SchemaKind;

    fn safe_parse_async<'a>(&'a self, value: &'a Value) -> LocalBoxFuture<'a, SafeParse<Self::Output>>;
}

impl<S: Schema + ?Sized> Schema for &S {
    type Output = S::Output;

    fn kind(&self) -> SchemaKind {
        (**self).kind()
    }

    fn safe_parse_async<'a>(&'a self, value: &'a Value) -> LocalBoxFuture<'a, SafeParse<Self::Output>> {
        (**self).safe_parse_async(value)
    }
}

impl<S: Schema + ?Sized> Schema for Rc<S> {
    type Output = S::Output;

    fn kind(&self) -> SchemaKind {
        (**self).kind()
    }

    fn safe_parse_async<'a>(&'a self, value: &'a Value) -> LocalBoxFuture<'a, SafeParse<Self::Output>> {
        (**self).safe_parse_async(value)
    }
}

/// Safe-parse outcome as reported across a foreign boundary:
/// `{"success": true, "data": ...}` or `{"success": false, "issues": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeParseReport {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

impl SafeParseReport {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            issues: Vec::new(),
        }
    }

    pub fn failure(issues: Vec<ValidationIssue>) -> Self {
        Self {
            success: false,
            data: None,
            issues,
        }
    }

    /// A successful report without `data` succeeds with `null` and emits a
    /// `warn` event, since the validator's output was lost on the way.
    pub fn into_safe_parse(self) -> SafeParse<Value> {
        if self.success {
            let data = self.data.unwrap_or_else(|| {
                tracing::warn!("successful safe-parse report carried no data");
                Value::Null
            });
            SafeParse::Success(data)
        } else {
            SafeParse::Failure(self.issues)
        }
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
