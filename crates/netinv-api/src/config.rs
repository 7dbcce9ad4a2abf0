//! Listener and middleware settings for the API server.

use std::time::Duration;

/// Runtime configuration of [`ApiServer`](crate::ApiServer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host or address to bind.
    pub host: String,

    pub port: u16,

    /// Upper bound on handling a single request; exceeded requests get 408.
    pub request_timeout: Duration,

    /// Origins allowed by CORS. Empty disables the CORS layer.
    pub cors_origins: Vec<String>,
}

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// `host:port`, bracketing bare IPv6 hosts.
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
