//! # API server
//!
//! Assembles the route tables, shared state and middleware into one
//! router, and runs it on a caller-supplied listener until shutdown.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::HeaderValue;
use axum::{BoxError, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use netinv_core::DeviceStore;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::routes::{device_routes, method_not_allowed, route_not_found, system_routes};
use crate::state::AppState;

/// HTTP front end of the device inventory.
pub struct ApiServer {
    config: ApiConfig,
    router: Router,
}

impl ApiServer {
    pub fn new(config: ApiConfig, store: Arc<DeviceStore>) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// The fully layered router (for tests and embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(
            %addr,
            timeout_secs = self.config.request_timeout.as_secs(),
            cors = !self.config.cors_origins.is_empty(),
            "device inventory API listening"
        );
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("device inventory API stopped");
        Ok(())
    }
}

/// Build the complete router for `store`.
pub fn build_router(config: &ApiConfig, store: Arc<DeviceStore>) -> Router {
    let router = Router::new()
        .merge(system_routes())
        .merge(device_routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .with_state(AppState::new(store));

    let router = with_timeout(router, config.request_timeout).layer(TraceLayer::new_for_http());

    match cors_layer(&config.cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Bound every request by `timeout`; expiry becomes a JSON 408.
fn with_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(middleware_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

async fn middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Middleware(err.to_string())
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }
    if origins.iter().any(|o| o == "*") {
        return Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
