//! HTTP/JSON surface of the netinv device inventory.
//!
//! Maps requests onto [`netinv_core::DeviceStore`] operations through the
//! validation layer, and translates every failure into a JSON
//! [`ErrorBody`] via [`ApiError`]:
//!
//! | Condition                              | Status |
//! |----------------------------------------|--------|
//! | malformed or missing fields            | 400    |
//! | duplicate id on create                 | 409    |
//! | unknown id                             | 404    |
//! | store unavailable                      | 500    |
//!
//! Routes: `/`, `/health`, `/stats`, `/devices`, `/devices/:id`.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use server::{ApiServer, build_router};
pub use state::AppState;
