//! HTTP response assertions.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::{Value, json};

/// Asserts the status and the `{"message": ...}` body.
pub fn assert_message(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": message }));
}

/// Asserts a 400 whose message starts with the given prefix.
pub fn assert_bad_request_starting_with(response: &TestResponse, prefix: &str) {
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let message = body["message"].as_str().expect("message should be a string");
    assert!(
        message.starts_with(prefix),
        "Expected message starting with {:?}, got {:?}",
        prefix,
        message
    );
}

/// Asserts a 500 that does not leak the store's error text.
pub fn assert_redacted_internal_error(response: &TestResponse) {
    assert_message(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    );
}
