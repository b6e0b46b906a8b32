//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::duplicate("taken"), ErrorCode::Duplicate)]
#[case(Error::invalid_input("bad"), ErrorCode::InvalidInput)]
#[case(Error::unexpected("boom"), ErrorCode::Unexpected)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidInput, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn unexpected_keeps_cause_message() {
    let err = Error::unexpected("connection refused");
    assert_eq!(err.message(), "connection refused");
    assert!(err.details().is_none());
}

#[rstest]
fn unexpected_falls_back_for_blank_cause() {
    let err = Error::unexpected("  ");
    assert_eq!(err.code(), ErrorCode::Unexpected);
    assert_eq!(err.message(), "unexpected failure");
}

#[rstest]
fn validation_failed_carries_every_violation() {
    let mut violations = FieldViolations::default();
    violations.record("name", "Name is required");
    violations.record("email", "Email must be valid");

    let err = Error::from(violations);

    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert_eq!(err.message(), VALIDATION_FAILED_MESSAGE);
    assert_eq!(
        err.details(),
        Some(&json!({
            "email": "Email must be valid",
            "name": "Name is required",
        }))
    );
}

#[rstest]
fn with_details_attaches_payload() {
    let err = Error::invalid_input("bad").with_details(json!({"field": "id"}));
    assert_eq!(err.details(), Some(&json!({"field": "id"})));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::duplicate("taken").to_string(), "taken");
}

#[rstest]
fn error_code_serialises_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::ValidationFailed).expect("serialise code");
    assert_eq!(value, json!("validation_failed"));
}
