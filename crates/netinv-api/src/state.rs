// ── Shared handler state ──

use std::sync::Arc;

use chrono::{DateTime, Utc};

use netinv_core::DeviceStore;

/// Cloned into every handler. The store itself is shared, never copied.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DeviceStore>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<DeviceStore>) -> Self {
        Self {
            store,
            started_at: Utc::now(),
        }
    }
}
