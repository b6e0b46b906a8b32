//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! return it directly: the status comes from the error code and the body is
//! always the response envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TraceId};

use super::envelope::ApiResponse;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Duplicate => StatusCode::CONFLICT,
        ErrorCode::InvalidInput | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::Unexpected {
            match TraceId::current() {
                Some(trace_id) => error!(%trace_id, error = %self, "request failed unexpectedly"),
                None => error!(error = %self, "request failed unexpectedly"),
            }
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self))
    }
}

#[cfg(test)]
mod tests;
