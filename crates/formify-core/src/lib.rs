pub mod field_path;
pub mod form;
pub mod issues;

pub use field_path::{
    flatten_segments, FieldPath, FieldPathError, FieldPathParseError, FieldPathSegment,
    MalformedSegmentPolicy,
};
pub use form::{FormElement, FormField, FormState, FormValue, InputType, UnknownInputType};
pub use issues::{FieldError, ParseResult, ValidationIssue};
