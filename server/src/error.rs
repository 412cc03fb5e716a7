//! Error codes and the JSON error body shared by every route.
//!
//! DESIGN
//! ======
//! Domain errors implement [`ErrorCode`] so a handler can turn any of them
//! into the same `{ "error", "message", "retryable" }` shape. HTTP status
//! selection stays with the domain error that knows its meaning.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

/// Stable machine-readable code plus retry hint for an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Body returned with every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub retryable: bool,
}

impl ErrorBody {
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { error: err.error_code().to_owned(), message: err.to_string(), retryable: err.retryable() }
    }
}

/// Render `err` as a JSON error response with the given status.
pub fn error_response(status: StatusCode, err: &(impl ErrorCode + ?Sized)) -> Response {
    (status, Json(ErrorBody::from_error(err))).into_response()
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
