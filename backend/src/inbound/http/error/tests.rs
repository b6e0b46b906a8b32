//! Tests for HTTP error mapping.

use super::*;
use crate::domain::FieldViolations;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

async fn envelope_of(error: &Error) -> (StatusCode, ApiResponse<Value>) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("envelope JSON deserialisation succeeds");
    (status, envelope)
}

#[rstest]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::duplicate("taken"), StatusCode::CONFLICT)]
#[case(Error::invalid_input("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::validation_failed(FieldViolations::default()), StatusCode::BAD_REQUEST)]
#[case(Error::unexpected("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn not_found_body_is_failure_envelope() {
    let (status, envelope) = envelope_of(&Error::not_found("Student not found with id: 3")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Student not found with id: 3");
    assert_eq!(envelope.data, None);
}

#[rstest]
#[actix_web::test]
async fn validation_body_lists_violations() {
    let mut violations = FieldViolations::default();
    violations.record("name", "Name is required");
    violations.record("gender", "Gender must be MALE, FEMALE, or OTHER");

    let (status, envelope) = envelope_of(&Error::validation_failed(violations)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope.message, "Validation failed");
    assert_eq!(
        envelope.data,
        Some(json!({
            "gender": "Gender must be MALE, FEMALE, or OTHER",
            "name": "Name is required",
        }))
    );
}

#[rstest]
#[actix_web::test]
async fn unexpected_body_prefixes_cause() {
    let (status, envelope) = envelope_of(&Error::unexpected("pool exhausted")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message, "An error occurred: pool exhausted");
}
