//! Service-level endpoints: welcome, health check, and inventory statistics.

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use netinv_core::DeviceStats;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "netinv";

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/stats", get(stats))
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: i64,
}

async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Network device inventory API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "GET /health",
            "GET /devices",
            "GET /devices/{id}",
            "POST /devices",
            "PUT /devices/{id}",
            "PATCH /devices/{id}",
            "DELETE /devices/{id}",
            "GET /stats",
        ],
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now,
        uptime_secs: (now - state.started_at).num_seconds(),
    })
}

async fn stats(State(state): State<AppState>) -> ApiResult<Json<DeviceStats>> {
    Ok(Json(state.store.stats()?))
}

/// JSON 405 for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}

/// JSON 404 for paths no route matches.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}
