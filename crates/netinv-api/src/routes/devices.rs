//! Device CRUD endpoints.
//!
//! Extractor rejections are taken as `Result`s so that malformed bodies,
//! query strings and ids come back as JSON `invalid_input` errors instead
//! of axum's plain-text defaults.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{debug, info};

use netinv_core::{
    CreateDeviceRequest, Device, DeviceId, DeviceQuery, UpdateDeviceRequest, validate_create,
    validate_filter, validate_update,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn device_routes() -> Router<AppState> {
    Router::new()
        .route("/devices", get(list_devices).post(create_device))
        .route(
            "/devices/:id",
            get(get_device)
                .put(update_device)
                .patch(update_device)
                .delete(delete_device),
        )
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub device: Device,
}

async fn list_devices(
    State(state): State<AppState>,
    query: Result<Query<DeviceQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Device>>> {
    let Query(query) = query.map_err(|r| ApiError::InvalidQuery(r.body_text()))?;
    let filter = validate_filter(query)?;
    let devices = state.store.list_filtered(&filter)?;
    debug!(count = devices.len(), ?filter, "listed devices");
    Ok(Json(devices))
}

async fn get_device(
    State(state): State<AppState>,
    id: Result<Path<DeviceId>, PathRejection>,
) -> ApiResult<Json<Device>> {
    let id = device_id(id)?;
    Ok(Json(state.store.get(id)?))
}

async fn create_device(
    State(state): State<AppState>,
    body: Result<Json<CreateDeviceRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Device>)> {
    let Json(request) = body.map_err(|r| ApiError::InvalidBody(r.body_text()))?;
    let new = validate_create(request)?;
    let device = state.store.create(new)?;
    info!(id = %device.id, name = %device.name, "device registered");
    Ok((StatusCode::CREATED, Json(device)))
}

async fn update_device(
    State(state): State<AppState>,
    id: Result<Path<DeviceId>, PathRejection>,
    body: Result<Json<UpdateDeviceRequest>, JsonRejection>,
) -> ApiResult<Json<Device>> {
    let id = device_id(id)?;
    let Json(request) = body.map_err(|r| ApiError::InvalidBody(r.body_text()))?;
    let patch = validate_update(id, request)?;
    let device = state.store.update(id, &patch)?;
    info!(id = %id, "device updated");
    Ok(Json(device))
}

async fn delete_device(
    State(state): State<AppState>,
    id: Result<Path<DeviceId>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = device_id(id)?;
    let device = state.store.delete(id)?;
    info!(id = %id, name = %device.name, "device removed");
    Ok(Json(DeleteResponse {
        message: format!("Device {} deleted successfully", device.name),
        device,
    }))
}

fn device_id(path: Result<Path<DeviceId>, PathRejection>) -> ApiResult<DeviceId> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(ApiError::InvalidPath(rejection.body_text())),
    }
}
