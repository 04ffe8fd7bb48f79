use super::{FieldError, ParseResult, ValidationIssue};
use crate::{FieldPath, FieldPathError, FieldPathSegment, MalformedSegmentPolicy};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn field_error_uses_flattened_key() {
    let issue = ValidationIssue::new(
        FieldPath::from_segments(vec!["a".into(), "b".into()]),
        "required",
    );
    let error =
        FieldError::from_issue(&issue, MalformedSegmentPolicy::default()).expect("must convert");
    assert_eq!(error, FieldError::new("a.b", "required"));
}

#[test]
fn field_error_propagates_rejected_segment() {
    let issue = ValidationIssue::new(
        FieldPath::from_segments(vec!["a".into(), FieldPathSegment::Unsupported(json!(false))]),
        "bad",
    );
    let err = FieldError::from_issue(&issue, MalformedSegmentPolicy::Reject)
        .expect_err("must reject");
    assert!(matches!(err, FieldPathError::UnsupportedSegment { position: 1, .. }));
}

#[test]
fn issue_deserializes_from_foreign_report() {
    let issue: ValidationIssue = serde_json::from_value(json!({
        "path": ["tags", 3],
        "message": "too short"
    }))
    .expect("must deserialize");
    assert_eq!(
        issue,
        ValidationIssue::new(FieldPath::from_segments(vec!["tags".into(), 3.into()]), "too short")
    );
}

#[test]
fn valid_result_serializes_with_empty_errors() {
    let result = ParseResult::valid(json!({"name": "Ada"}));
    assert_eq!(
        serde_json::to_value(&result).expect("must serialize"),
        json!({"value": {"name": "Ada"}, "errors": []})
    );
}

#[test]
fn invalid_result_has_no_value_key() {
    let result: ParseResult<serde_json::Value> =
        ParseResult::invalid(vec![FieldError::new("a.b", "required")]);
    assert!(!result.is_valid());
    assert!(result.value().is_none());
    assert_eq!(
        serde_json::to_value(&result).expect("must serialize"),
        json!({"errors": [{"key": "a.b", "message": "required"}]})
    );
}

#[test]
fn invalid_shape_deserializes_as_invalid() {
    let result: ParseResult<serde_json::Value> =
        serde_json::from_value(json!({"errors": [{"key": "x", "message": "m"}]}))
            .expect("must deserialize");
    assert_eq!(result, ParseResult::invalid(vec![FieldError::new("x", "m")]));
}

#[test]
fn error_map_keeps_first_message_per_key() {
    let result: ParseResult<()> = ParseResult::invalid(vec![
        FieldError::new("email", "required"),
        FieldError::new("email", "invalid email"),
        FieldError::new("age", "too small"),
    ]);
    let map = result.error_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map["email"], "required");
    assert_eq!(map["age"], "too small");
}

#[test]
fn map_transforms_only_valid_value() {
    let doubled = ParseResult::valid(21).map(|value| value * 2);
    assert_eq!(doubled.into_value(), Some(42));

    let invalid: ParseResult<i32> = ParseResult::invalid(vec![FieldError::new("n", "nan")]);
    assert_eq!(invalid.map(|value| value * 2).errors().len(), 1);
}

#[test]
fn errors_without_value_stay_invalid_for_optional_values() {
    let result: ParseResult<Option<serde_json::Value>> =
        serde_json::from_value(json!({"errors": [{"key": "x", "message": "m"}]}))
            .expect("must deserialize");
    assert_eq!(result, ParseResult::invalid(vec![FieldError::new("x", "m")]));

    let result: ParseResult<Option<serde_json::Value>> =
        serde_json::from_value(json!({"value": null, "errors": []})).expect("must deserialize");
    assert_eq!(result, ParseResult::valid(None));
}

#[test]
fn valid_result_never_carries_errors() {
    let result = ParseResult::valid(7);
    assert!(result.errors().is_empty());
    assert_eq!(
        serde_json::to_value(&result).expect("must serialize"),
        json!({"value": 7, "errors": []})
    );

    let err = serde_json::from_value::<ParseResult<i32>>(json!({
        "value": 7,
        "errors": [{"key": "n", "message": "too big"}]
    }))
    .expect_err("must reject");
    assert!(err.to_string().contains("cannot carry errors"));
}
