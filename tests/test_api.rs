//! Integration tests for the JSON request boundary
//!
//! Covers every row of the status mapping: 200 success, 400 decode
//! failure, 422 invalid character, 500 for everything else.

use calcr::api::handle;

fn body_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("response body should be valid JSON")
}

#[test]
fn test_success_returns_result() {
    let response = handle(r#"{"expression": "3 + 4 * 2"}"#);
    assert_eq!(response.status, 200);
    assert_eq!(body_json(&response.body)["result"].as_f64(), Some(11.0));
}

#[test]
fn test_success_fractional_result() {
    let response = handle(r#"{"expression": "10 / 4"}"#);
    assert_eq!(response.status, 200);
    assert_eq!(body_json(&response.body)["result"].as_f64(), Some(2.5));
}

#[test]
fn test_invalid_character_is_unprocessable() {
    let response = handle(r#"{"expression": "3$4"}"#);
    assert_eq!(response.status, 422);
    assert_eq!(
        body_json(&response.body)["error"].as_str(),
        Some("Expression is not valid")
    );
}

#[test]
fn test_division_by_zero_is_internal_error() {
    let response = handle(r#"{"expression": "10/0"}"#);
    assert_eq!(response.status, 500);
    assert_eq!(
        body_json(&response.body)["error"].as_str(),
        Some("Internal server error")
    );
}

#[test]
fn test_malformed_expression_is_internal_error() {
    let response = handle(r#"{"expression": "3+"}"#);
    assert_eq!(response.status, 500);
}

#[test]
fn test_mismatched_parens_is_internal_error() {
    let response = handle(r#"{"expression": "3+4)"}"#);
    assert_eq!(response.status, 500);
}

#[test]
fn test_bad_number_is_internal_error() {
    let response = handle(r#"{"expression": "3..4+1"}"#);
    assert_eq!(response.status, 500);
}

#[test]
fn test_empty_expression_is_internal_error() {
    let response = handle(r#"{"expression": ""}"#);
    assert_eq!(response.status, 500);
}

#[test]
fn test_non_json_body_is_bad_request() {
    let response = handle("not json at all");
    assert_eq!(response.status, 400);
    assert_eq!(
        body_json(&response.body)["error"].as_str(),
        Some("Invalid request body")
    );
}

#[test]
fn test_missing_field_is_bad_request() {
    let response = handle("{}");
    assert_eq!(response.status, 400);
}

#[test]
fn test_wrong_field_type_is_bad_request() {
    let response = handle(r#"{"expression": 42}"#);
    assert_eq!(response.status, 400);
}

#[test]
fn test_decode_failure_never_reaches_the_evaluator() {
    // A body that would evaluate fine as an expression is still a decode
    // failure when it is not the expected request shape
    let response = handle(r#""3+4""#);
    assert_eq!(response.status, 400);
}
