use crate::kind::SchemaKind;
use crate::options::AdapterOptions;
use crate::schema::{SafeParse, Schema};
use formify_core::{FieldError, FieldPathError, ParseResult, ValidationIssue};
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AdaptError {
    #[error("schema adapter requires an object schema, found `{found}`")]
    InvalidSchemaKind { found: SchemaKind },
    #[error("issue `{message}` has a malformed path: {source}")]
    MalformedPathSegment {
        message: String,
        #[source]
        source: FieldPathError,
    },
}

/// Gives any object [`Schema`] the uniform `parse(value)` contract used by
/// form components.
#[derive(Debug, Clone)]
pub struct SchemaAdapter<S> {
    schema: S,
    options: AdapterOptions,
}

pub fn adapt<S: Schema>(schema: S) -> SchemaAdapter<S> {
    SchemaAdapter::new(schema)
}

impl<S: Schema> SchemaAdapter<S> {
    pub fn new(schema: S) -> Self {
        Self::with_options(schema, AdapterOptions::default())
    }

    pub fn with_options(schema: S, options: AdapterOptions) -> Self {
        Self { schema, options }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    /// Validates `value` and returns either the validator's output or one
    /// [`FieldError`] per issue, in the order the validator reported them.
    ///
    /// The schema kind is checked on every call; a non-object schema fails
    /// with [`AdaptError::InvalidSchemaKind`] before the validator runs.
    pub async fn parse(&self, value: &Value) -> Result<ParseResult<S::Output>, AdaptError> {
        let kind = self.schema.kind();
        if kind != SchemaKind::Object {
            tracing::error!(%kind, "schema adapter received a non-object schema");
            return Err(AdaptError::InvalidSchemaKind { found: kind });
        }

        match self.schema.safe_parse_async(value).await {
            SafeParse::Success(output) => Ok(ParseResult::valid(output)),
            SafeParse::Failure(issues) => Ok(ParseResult::invalid(self.field_errors(&issues)?)),
        }
    }

    fn field_errors(&self, issues: &[ValidationIssue]) -> Result<Vec<FieldError>, AdaptError> {
        issues
            .iter()
            .map(|issue| {
                if self.options.log_issues {
                    tracing::debug!(path = ?issue.path, message = %issue.message, "validation issue");
                }
                FieldError::from_issue(issue, self.options.malformed_segment_policy).map_err(
                    |source| AdaptError::MalformedPathSegment {
                        message: issue.message.clone(),
                        source,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;
