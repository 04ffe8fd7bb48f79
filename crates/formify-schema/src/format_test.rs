use super::{decode_document, DecodeError, DocumentFormat};
use serde_json::{json, Value};

#[test]
fn auto_detects_json() {
    let value: Value = decode_document(r#" {"a": [1, 2]}"#, DocumentFormat::Auto).expect("must decode");
    assert_eq!(value, json!({"a": [1, 2]}));
}

#[test]
fn auto_falls_back_to_yaml() {
    let input = "type: object\nrequired:\n  - name\n";
    let value: Value = decode_document(input, DocumentFormat::Auto).expect("must decode");
    assert_eq!(value, json!({"type": "object", "required": ["name"]}));
}

#[test]
fn explicit_json_reports_json_errors() {
    let err = decode_document::<Value>("type: object", DocumentFormat::Json).expect_err("must fail");
    assert!(matches!(err, DecodeError::Json(_)));
}
