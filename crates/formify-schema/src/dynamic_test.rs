use super::DynamicSchema;
use crate::{adapt, AdaptError, SafeParseReport, SchemaKind};
use formify_core::{FieldError, ParseResult};
use futures::executor::block_on;
use serde_json::{json, Value};
use std::rc::Rc;

fn report_from_json(report: Value) -> SafeParseReport {
    serde_json::from_value(report).expect("report must deserialize")
}

/// Requires a non-empty `email` string; echoes the input on success.
fn email_schema(tag: &str) -> DynamicSchema {
    DynamicSchema::from_tag(tag, |value: Value| async move {
        match value.get("email").and_then(Value::as_str) {
            Some(email) if !email.is_empty() => SafeParseReport::success(value.clone()),
            _ => report_from_json(json!({
                "success": false,
                "issues": [{"path": ["contact", "email"], "message": "required"}]
            })),
        }
    })
}

#[test]
fn foreign_report_success_returns_data() {
    let schema = email_schema("object");
    let input = json!({"email": "ada@example.com"});
    let result = block_on(adapt(&schema).parse(&input)).expect("must parse");
    assert_eq!(result, ParseResult::valid(input));
}

#[test]
fn foreign_report_failure_is_flattened() {
    let schema = email_schema("object");
    let result = block_on(adapt(&schema).parse(&json!({}))).expect("must parse");
    assert_eq!(result, ParseResult::invalid(vec![FieldError::new("contact.email", "required")]));
}

#[test]
fn anomalous_segments_in_report_are_substituted() {
    let schema = DynamicSchema::new(SchemaKind::Object, |_value: Value| async {
        report_from_json(json!({
            "success": false,
            "issues": [{"path": ["rows", 1.5, "cell"], "message": "bad cell"}]
        }))
    });
    let result = block_on(adapt(&schema).parse(&json!({}))).expect("must parse");
    assert_eq!(result.errors(), &[FieldError::new("rows[1.5].cell", "bad cell")]);
}

#[test]
fn unknown_tag_is_not_an_object() {
    let schema = email_schema("ZodEffects");
    let err = block_on(adapt(&schema).parse(&json!({}))).expect_err("must reject");
    assert_eq!(err, AdaptError::InvalidSchemaKind { found: SchemaKind::Any });
}

#[test]
fn kind_swapped_after_adapt_is_caught() {
    let schema = Rc::new(email_schema("object"));
    let adapter = adapt(Rc::clone(&schema));
    let input = json!({"email": "ada@example.com"});

    assert!(block_on(adapter.parse(&input)).expect("must parse").is_valid());

    schema.set_kind(SchemaKind::Array);
    for _ in 0..2 {
        let err = block_on(adapter.parse(&input)).expect_err("must reject");
        assert_eq!(err, AdaptError::InvalidSchemaKind { found: SchemaKind::Array });
    }

    schema.set_kind(SchemaKind::Object);
    assert!(block_on(adapter.parse(&input)).expect("must parse").is_valid());
}
