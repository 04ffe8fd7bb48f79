use crate::format::{decode_document, DecodeError, DocumentFormat};
use formify_core::MalformedSegmentPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterOptions {
    #[serde(default)]
    pub malformed_segment_policy: MalformedSegmentPolicy,
    /// Emit a `debug` event per raw issue before it is flattened.
    #[serde(default = "default_log_issues")]
    pub log_issues: bool,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            malformed_segment_policy: MalformedSegmentPolicy::default(),
            log_issues: default_log_issues(),
        }
    }
}

fn default_log_issues() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
#[error("adapter options parse failed: {0}")]
pub struct OptionsError(#[from] DecodeError);

pub fn parse_adapter_options(
    input: &str,
    format: DocumentFormat,
) -> Result<AdapterOptions, OptionsError> {
    Ok(decode_document(input, format)?)
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
