use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Auto,
    Json,
    Yaml,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml decode error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Decodes JSON or YAML text. `Auto` picks JSON when the input opens with a
/// brace or bracket and YAML otherwise.
pub fn decode_document<T: DeserializeOwned>(
    input: &str,
    format: DocumentFormat,
) -> Result<T, DecodeError> {
    let format = match format {
        DocumentFormat::Auto if looks_like_json(input) => DocumentFormat::Json,
        DocumentFormat::Auto => DocumentFormat::Yaml,
        explicit => explicit,
    };
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(input)?),
        _ => Ok(serde_yaml::from_str(input)?),
    }
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
