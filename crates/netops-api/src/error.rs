//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use netops_core::NetopsError;
use serde::Serialize;

/// API error type that converts to HTTP responses.
///
/// This is the single translation point from domain errors to response
/// codes. Transport failures never reach it; the executor has already
/// turned them into command results by the time a response is built.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error
    Internal(String),
}

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "API error");
        } else {
            tracing::debug!(%status, %message, "API client error");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<NetopsError> for ApiError {
    fn from(err: NetopsError) -> Self {
        let message = err.to_string();
        match err.status_code() {
            400 => ApiError::BadRequest(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Internal(message),
        }
    }
}
