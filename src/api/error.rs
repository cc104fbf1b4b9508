//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint returns
//! the same JSON error shape.
//!
//! # Key invariants and assumptions
//! - Error responses carry a stable `code`, a human-readable `message`, and
//!   optionally a `details` string.
//! - The status code must align with the error category: 400 for client
//!   input, 500 for upstream or internal failure.
use crate::api::types::ErrorResponse;
use crate::upstream::UpstreamError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Structured API error returned by handlers.
///
/// Couples an HTTP status code with a JSON error body and implements
/// `IntoResponse` so handlers can use it in `Result`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Build a 400 Bad Request validation error.
///
/// Used when required coordinates are missing or unparsable; emitted before
/// any upstream call is attempted.
pub fn api_validation_error(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse {
            code: "validation_error".to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

/// Build a 500 error from an upstream failure.
///
/// Logs the failure server-side and surfaces a generic message plus the
/// upstream error string as `details`.
pub fn api_upstream_error(err: &UpstreamError) -> ApiError {
    tracing::error!(error = %err, "webcam directory request failed");
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            code: "upstream_error".to_string(),
            message: "failed to fetch webcam data".to_string(),
            details: Some(err.to_string()),
        },
    }
}

/// Build a 500 Internal Server Error without an upstream cause.
pub fn api_internal_message(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            code: "internal".to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
