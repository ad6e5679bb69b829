//! Command execution handler

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use netops_core::{CommandResult, ExecOptions};

use super::{require_json, require_str};
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /command
///
/// Run one CLI command against the device registered under `host`.
/// Responds 200 with the command result even when the command itself
/// reports `status: "failed"` — a remote failure is a normal outcome, not
/// an HTTP error. Unknown or ambiguous hosts are 404; a record whose
/// platform cannot be resolved is 500.
pub async fn run_command(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let body = require_json(body)?;

    let host = require_str(&body, "host")?;
    let command = require_str(&body, "command")?;

    let mut options = ExecOptions::default();
    if let Some(secs) = body.get("timeout_secs").and_then(Value::as_u64) {
        options.timeout = Some(Duration::from_secs(secs));
    }

    let record = state.inventory().get_by_host(host)?;
    let result = state.executor().run_command(&record, command, &options).await?;

    Ok(Json(result))
}
