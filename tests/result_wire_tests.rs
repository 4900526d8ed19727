//! # Result model wire-contract tests
//!
//! The ApiResult shape is meant for serialization into API responses;
//! these tests pin the wire contract end to end, including the schema
//! validation adapter feeding field errors into a failure body.

use kitbag::object::{deep_merge, get_path, set_path};
use kitbag::outcome::{auth, common};
use kitbag::{
    failure, is_failure_result, is_success_result, ok_with, validate, ApiResult, FailureResult,
};
use serde_json::json;

#[test]
fn success_wire_shape_survives_a_round_trip() {
    let result = ok_with(json!({"id": 42, "name": "ada"}));
    let wire = serde_json::to_string(&result).unwrap();
    let parsed: ApiResult<serde_json::Value> = serde_json::from_str(&wire).unwrap();

    assert!(is_success_result(&parsed));
    assert_eq!(parsed.data().unwrap()["name"], "ada");
}

#[test]
fn failure_wire_shape_without_discriminant_parses_as_failure() {
    // A server that never writes `success: false` is still understood.
    let wire = r#"{"code":"TOKEN_EXPIRED","statusCode":401,"description":"expired"}"#;
    let parsed: ApiResult<()> = serde_json::from_str(wire).unwrap();
    assert!(is_failure_result(&parsed));
}

#[test]
fn validation_errors_flow_into_the_response_body() {
    let schema = jsonschema::validator_for(&json!({
        "type": "object",
        "properties": {
            "email": {"type": "string", "minLength": 3},
            "age": {"type": "integer"}
        }
    }))
    .unwrap();

    let result = validate(&schema, &json!({"email": "x", "age": "old"}));
    let failure = match result {
        ApiResult::Failure(f) => f,
        ApiResult::Success(_) => panic!("expected validation failure"),
    };

    let body = failure.response_body();
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body.get("statusCode").is_none());
    let field_errors = &body["fieldErrors"];
    assert!(field_errors.get("email").is_some());
    assert!(field_errors.get("age").is_some());
}

#[test]
fn failure_body_composes_with_object_helpers() {
    // Typical handler flow: build a failure body, then annotate it.
    let failure = FailureResult::from_model(&auth::FORBIDDEN);
    let mut body = failure.response_body();
    set_path(&mut body, "meta.requestId", json!("req-123")).unwrap();

    assert_eq!(get_path(&body, "meta.requestId", json!(null)), json!("req-123"));
    assert_eq!(get_path(&body, "code", json!(null)), json!("FORBIDDEN"));

    // merging response defaults must not clobber the failure fields
    let merged = deep_merge(&json!({"meta": {"version": 2}}), &body);
    assert_eq!(get_path(&merged, "meta.version", json!(null)), json!(2));
    assert_eq!(get_path(&merged, "meta.requestId", json!(null)), json!("req-123"));
}

#[test]
fn catalog_failures_are_distinguishable_by_code() {
    let not_found: ApiResult<()> = failure(&common::NOT_FOUND);
    let conflict: ApiResult<()> = failure(&common::CONFLICT);

    match (&not_found, &conflict) {
        (ApiResult::Failure(a), ApiResult::Failure(b)) => {
            assert_ne!(a.code, b.code);
            assert_eq!(a.status_code, 404);
            assert_eq!(b.status_code, 409);
        }
        _ => panic!("catalog constructors must build failures"),
    }
}
