//! Device registration and listing handlers

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use netops_core::DeviceRecord;

use super::{require_json, require_str};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AddDeviceResponse {
    pub status: &'static str,
    pub device: DeviceRecord,
}

/// GET /devices
///
/// List all registered devices as a bare JSON array. Records are returned
/// in full, passwords included; redaction is a known gap in the interface.
pub async fn list_devices(State(state): State<AppState>) -> Json<Vec<DeviceRecord>> {
    Json(state.inventory().devices())
}

/// PUT /devices
///
/// Register a device from `{platform, host, user, password, ...extra}`.
/// Any field beyond the four identity fields is stored verbatim on the
/// record. Re-registering the same identity tuple overwrites in place.
pub async fn add_device(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AddDeviceResponse>), ApiError> {
    let body = require_json(body)?;

    let platform = require_str(&body, "platform")?;
    let host = require_str(&body, "host")?;
    let user = require_str(&body, "user")?;
    let password = require_str(&body, "password")?;

    let extra: BTreeMap<String, Value> = body
        .as_object()
        .map(|map| {
            map.iter()
                .filter(|(k, _)| {
                    !matches!(k.as_str(), "platform" | "host" | "user" | "password" | "uid")
                })
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default();

    let uid = state
        .inventory()
        .add_device(platform, host, user, password, extra);
    let device = state.inventory().get_by_uid(&uid)?;

    tracing::info!(uid = %uid, host = %host, platform = %platform, "Device added");

    Ok((
        StatusCode::CREATED,
        Json(AddDeviceResponse {
            status: "added",
            device,
        }),
    ))
}
