use super::{SafeParse, SafeParseReport};
use formify_core::{FieldPath, ValidationIssue};
use serde_json::{json, Value};

#[test]
fn success_report_without_data_yields_null() {
    let report: SafeParseReport =
        serde_json::from_value(json!({"success": true})).expect("must deserialize");
    assert_eq!(report.data, None);
    assert_eq!(report.into_safe_parse(), SafeParse::Success(Value::Null));
}

#[test]
fn success_report_keeps_data() {
    let report = SafeParseReport::success(json!({"name": "Ada"}));
    assert_eq!(report.into_safe_parse(), SafeParse::Success(json!({"name": "Ada"})));
}

#[test]
fn failure_report_keeps_issues() {
    let report: SafeParseReport = serde_json::from_value(json!({
        "success": false,
        "issues": [{"path": ["a", "b"], "message": "required"}]
    }))
    .expect("must deserialize");
    assert_eq!(
        report.into_safe_parse(),
        SafeParse::Failure(vec![ValidationIssue::new(
            FieldPath::from_segments(vec!["a".into(), "b".into()]),
            "required",
        )])
    );
}
