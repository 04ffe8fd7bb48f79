use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// One step into a nested value.
///
/// Validators built in Rust only ever produce `Key` and `Index`. `Unsupported`
/// captures whatever a foreign issue report carried that is neither a string
/// nor a non-negative integer, so it can be handled by a
/// [`MalformedSegmentPolicy`] instead of failing deserialization of the whole
/// report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldPathSegment {
    Key(String),
    Index(usize),
    Unsupported(Value),
}

impl From<&str> for FieldPathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for FieldPathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for FieldPathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// What flattening does with an [`FieldPathSegment::Unsupported`] segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedSegmentPolicy {
    /// Render the segment as a bracketed JSON literal and keep the rest.
    #[default]
    Substitute,
    /// Collapse the whole path to the empty string.
    DropPath,
    /// Fail with [`FieldPathError::UnsupportedSegment`].
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath {
    segments: Vec<FieldPathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn from_segments(segments: Vec<FieldPathSegment>) -> Self {
        Self { segments }
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(FieldPathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(FieldPathSegment::Index(index));
    }

    pub fn segments(&self) -> &[FieldPathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flattens the path, rejecting unsupported segments.
    pub fn flatten(&self) -> Result<String, FieldPathError> {
        flatten_segments(&self.segments, MalformedSegmentPolicy::Reject)
    }

    pub fn flatten_with(&self, policy: MalformedSegmentPolicy) -> Result<String, FieldPathError> {
        flatten_segments(&self.segments, policy)
    }
}

impl From<Vec<FieldPathSegment>> for FieldPath {
    fn from(segments: Vec<FieldPathSegment>) -> Self {
        Self::from_segments(segments)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("unsupported path segment at position {position}: {found}")]
    UnsupportedSegment { position: usize, found: Value },
}

/// Joins segments into template notation: `["user", 0, "name"]` becomes
/// `user[0].name`.
///
/// Keys are separated by `.`; an index attaches to whatever precedes it as
/// `[i]`. The empty path flattens to the empty string.
pub fn flatten_segments(
    segments: &[FieldPathSegment],
    policy: MalformedSegmentPolicy,
) -> Result<String, FieldPathError> {
    for (position, segment) in segments.iter().enumerate() {
        if let FieldPathSegment::Unsupported(found) = segment {
            tracing::warn!(position, %found, ?policy, "unsupported field path segment");
            match policy {
                MalformedSegmentPolicy::Substitute => {}
                MalformedSegmentPolicy::DropPath => return Ok(String::new()),
                MalformedSegmentPolicy::Reject => {
                    return Err(FieldPathError::UnsupportedSegment {
                        position,
                        found: found.clone(),
                    });
                }
            }
        }
    }
    Ok(Flattened(segments).to_string())
}

/// Template notation with unsupported segments rendered as `[<json>]`.
struct Flattened<'a>(&'a [FieldPathSegment]);

impl Display for Flattened<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                FieldPathSegment::Key(key) if position > 0 => write!(f, ".{key}")?,
                FieldPathSegment::Key(key) => f.write_str(key)?,
                FieldPathSegment::Index(index) => write!(f, "[{index}]")?,
                FieldPathSegment::Unsupported(found) => write!(f, "[{found}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldPathParseError {
    #[error("field path cannot start with '.'")]
    LeadingDot,
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("invalid index segment")]
    InvalidIndex,
    #[error("expected '.' before key segment")]
    MissingDot,
    #[error("invalid key segment")]
    InvalidKey,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

/// Parses the flattened notation back into segments.
///
/// Keys run up to the next `.`, `[` or `]`, so keys containing those
/// characters do not survive a flatten/parse cycle. Neither does an empty
/// leading key: `["", "a"]` flattens to `.a`, which is rejected with
/// [`FieldPathParseError::LeadingDot`].
impl std::str::FromStr for FieldPath {
    type Err = FieldPathParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bytes = input.as_bytes();
        let mut position = 0;
        let mut segments = Vec::new();

        while position < bytes.len() {
            match bytes[position] {
                b'.' => {
                    if segments.is_empty() {
                        return Err(FieldPathParseError::LeadingDot);
                    }
                    position += 1;
                    if position >= bytes.len() {
                        return Err(FieldPathParseError::UnexpectedEnd);
                    }
                    let key = read_key(input, &mut position);
                    if key.is_empty() {
                        return Err(FieldPathParseError::InvalidKey);
                    }
                    segments.push(FieldPathSegment::Key(key.to_string()));
                }
                b'[' => {
                    position += 1;
                    let start = position;
                    while position < bytes.len() && bytes[position].is_ascii_digit() {
                        position += 1;
                    }
                    if start == position || position >= bytes.len() || bytes[position] != b']' {
                        return Err(FieldPathParseError::InvalidIndex);
                    }
                    let index = input[start..position]
                        .parse::<usize>()
                        .map_err(|_| FieldPathParseError::InvalidIndex)?;
                    position += 1;
                    segments.push(FieldPathSegment::Index(index));
                }
                b']' => return Err(FieldPathParseError::UnexpectedChar(']')),
                _ => {
                    if !segments.is_empty() {
                        return Err(FieldPathParseError::MissingDot);
                    }
                    let key = read_key(input, &mut position);
                    segments.push(FieldPathSegment::Key(key.to_string()));
                }
            }
        }

        Ok(FieldPath::from_segments(segments))
    }
}

fn read_key<'a>(input: &'a str, position: &mut usize) -> &'a str {
    let bytes = input.as_bytes();
    let start = *position;
    while *position < bytes.len() && !matches!(bytes[*position], b'.' | b'[' | b']') {
        *position += 1;
    }
    &input[start..*position]
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Flattened(&self.segments).fmt(f)
    }
}

#[cfg(test)]
#[path = "field_path_test.rs"]
mod tests;
