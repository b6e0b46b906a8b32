//! Uniform response envelope for student endpoints.
//!
//! Every student endpoint answers with an [`ApiResponse`], whether the call
//! succeeded or failed. `data` is always present in the JSON, as `null` when
//! there is no payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, ErrorCode};

/// Prefix applied to the message of unexpected failures.
pub const UNEXPECTED_MESSAGE_PREFIX: &str = "An error occurred: ";

/// Success/failure wrapper with message, payload and construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Successful outcome carrying `data`.
    ///
    /// # Examples
    /// ```
    /// use student_registry::inbound::http::envelope::ApiResponse;
    ///
    /// let response = ApiResponse::success("Student retrieved successfully", 7);
    /// assert!(response.success);
    /// assert_eq!(response.data, Some(7));
    /// ```
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: Utc::now(),
        }
    }

    /// Successful outcome without a payload.
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<Value> {
    /// Failed outcome built from a domain error.
    ///
    /// Validation failures carry the field violation map as `data`.
    /// Unexpected failures get [`UNEXPECTED_MESSAGE_PREFIX`] in front of the
    /// cause.
    pub fn failure(error: &Error) -> Self {
        let message = match error.code() {
            ErrorCode::Unexpected => format!("{UNEXPECTED_MESSAGE_PREFIX}{}", error.message()),
            _ => error.message().to_owned(),
        };
        let data = match error.code() {
            ErrorCode::ValidationFailed => error.details().cloned(),
            _ => None,
        };
        Self {
            success: false,
            message,
            data,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldViolations;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn success_envelope_serialises_every_key() {
        let response = ApiResponse::success("Students retrieved successfully", vec![1, 2]);
        let value = serde_json::to_value(&response).expect("serialise envelope");

        assert_eq!(value.get("success"), Some(&json!(true)));
        assert_eq!(
            value.get("message"),
            Some(&json!("Students retrieved successfully"))
        );
        assert_eq!(value.get("data"), Some(&json!([1, 2])));
        assert!(value.get("timestamp").and_then(Value::as_str).is_some());
    }

    #[rstest]
    fn empty_success_serialises_null_data() {
        let response = ApiResponse::<Value>::success_empty("Student deleted successfully");
        let value = serde_json::to_value(&response).expect("serialise envelope");
        assert_eq!(value.get("data"), Some(&Value::Null));
    }

    #[rstest]
    fn validation_failure_carries_violations() {
        let mut violations = FieldViolations::default();
        violations.record("age", "Age is required");

        let response = ApiResponse::failure(&Error::validation_failed(violations));

        assert!(!response.success);
        assert_eq!(response.message, "Validation failed");
        assert_eq!(response.data, Some(json!({"age": "Age is required"})));
    }

    #[rstest]
    fn unexpected_failure_prefixes_message() {
        let response = ApiResponse::failure(&Error::unexpected("disk full"));
        assert_eq!(response.message, "An error occurred: disk full");
        assert_eq!(response.data, None);
    }

    #[rstest]
    #[case(Error::not_found("Student not found with id: 1"))]
    #[case(Error::duplicate("Student with email a@x.com already exists"))]
    #[case(Error::invalid_input("bad id"))]
    fn other_failures_keep_message_and_drop_details(#[case] error: Error) {
        let error = error.with_details(json!({"hidden": true}));
        let response = ApiResponse::failure(&error);
        assert_eq!(response.message, error.message());
        assert_eq!(response.data, None);
    }
}
