// ── Route tables ──

mod devices;
mod system;

pub use devices::{DeleteResponse, device_routes};
pub use system::{
    HealthResponse, SERVICE_NAME, WelcomeResponse, method_not_allowed, route_not_found,
    system_routes,
};
