//! HTTP request handlers

pub mod command;
pub mod devices;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;

/// Unwrap a JSON body, mapping every extractor rejection to a 400.
pub(crate) fn require_json(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(_) => Err(ApiError::BadRequest("Invalid JSON".to_string())),
    }
}

/// Extract a required non-empty string field from a JSON object.
pub(crate) fn require_str<'a>(body: &'a Value, field: &str) -> Result<&'a str, ApiError> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("'{field}' is required")))
}
