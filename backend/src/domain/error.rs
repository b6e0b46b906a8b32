//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status and wraps the message in the response envelope.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::FieldViolations;

/// Failure category, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The addressed student record does not exist.
    NotFound,
    /// The email address already belongs to another student.
    Duplicate,
    /// The request could not be interpreted (bad path, malformed body).
    InvalidInput,
    /// One or more fields broke their constraints.
    ValidationFailed,
    /// Anything else; carries the underlying cause.
    Unexpected,
}

/// Message used for every [`ErrorCode::ValidationFailed`] error.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
/// - [`ErrorCode::ValidationFailed`] errors carry the field violation map in
///   `details`.
///
/// # Examples
/// ```
/// use student_registry::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Student not found with id: 7");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

/// Reasons [`Error::try_new`] refuses a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyMessage,
}

impl fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Build an error from a known-good message.
    ///
    /// # Panics
    /// Panics when `message` is blank. Use [`Error::try_new`] for messages
    /// that are not known to be valid.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Build an error, rejecting blank messages.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message shown to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// A [`ErrorCode::NotFound`] error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Duplicate`].
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Duplicate, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Build a [`ErrorCode::ValidationFailed`] error carrying every violation.
    ///
    /// # Examples
    /// ```
    /// use student_registry::domain::{Error, ErrorCode, FieldViolations};
    ///
    /// let mut violations = FieldViolations::default();
    /// violations.record("age", "Age must be at least 1");
    /// let err = Error::validation_failed(violations);
    /// assert_eq!(err.code(), ErrorCode::ValidationFailed);
    /// assert_eq!(err.message(), "Validation failed");
    /// assert!(err.details().is_some());
    /// ```
    pub fn validation_failed(violations: FieldViolations) -> Self {
        Self::new(ErrorCode::ValidationFailed, VALIDATION_FAILED_MESSAGE)
            .with_details(violations.into_value())
    }

    /// Wrap an underlying failure as [`ErrorCode::Unexpected`].
    ///
    /// The cause's display text becomes the message; a blank cause falls back
    /// to a generic description.
    pub fn unexpected(cause: impl fmt::Display) -> Self {
        Self::try_new(ErrorCode::Unexpected, cause.to_string())
            .unwrap_or_else(|_| Self::new(ErrorCode::Unexpected, "unexpected failure"))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<FieldViolations> for Error {
    fn from(value: FieldViolations) -> Self {
        Self::validation_failed(value)
    }
}

#[cfg(test)]
mod tests;
