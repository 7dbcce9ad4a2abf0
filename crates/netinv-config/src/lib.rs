//! Layered configuration for the netinv service.
//!
//! Built-in defaults, then an optional TOML file, then `NETINV_*`
//! environment variables (`__` separates nesting, e.g.
//! `NETINV_SERVER__PORT=9000`). The result translates into an
//! [`ApiConfig`] for the HTTP server and a validated list of seed devices.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use netinv_api::ApiConfig;
use netinv_api::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT};
use netinv_core::{CoreError, CreateDeviceRequest, NewDevice, sample_devices, validate_create};

pub const ENV_PREFIX: &str = "NETINV_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config file not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("invalid seed device #{index}: {source}")]
    InvalidSeed {
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub inventory: InventorySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// CORS origins; empty disables CORS, `"*"` allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `"info"` or `"netinv_api=debug,info"`.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

/// Devices loaded into the store at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InventorySettings {
    /// Preload the three built-in demo devices.
    #[serde(default)]
    pub sample_devices: bool,

    /// Additional devices, validated exactly like `POST /devices` bodies.
    #[serde(default)]
    pub devices: Vec<CreateDeviceRequest>,
}

impl Config {
    /// Reject values that would only fail later at bind or serve time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "server.host".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "server.request_timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "logging.level".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Translate the server section into the API server's settings.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            host: self.server.host.clone(),
            port: self.server.port,
            request_timeout: Duration::from_secs(self.server.request_timeout_secs),
            cors_origins: self.server.cors_origins.clone(),
        }
    }

    /// Sample devices (if enabled) followed by the configured ones, validated.
    pub fn seed_devices(&self) -> Result<Vec<NewDevice>, ConfigError> {
        let mut seeds = if self.inventory.sample_devices {
            sample_devices()
        } else {
            Vec::new()
        };
        for (index, request) in self.inventory.devices.iter().enumerate() {
            let device = validate_create(request.clone())
                .map_err(|source| ConfigError::InvalidSeed { index, source })?;
            seeds.push(device);
        }
        Ok(seeds)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the default config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "netinv", "netinv").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("netinv");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// The provider stack: defaults, then `file`, then environment.
pub fn figment(file: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load and validate the configuration.
///
/// An explicit `path` must exist; the default path is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(p) if !p.exists() => {
            return Err(ConfigError::Missing {
                path: p.to_path_buf(),
            });
        }
        Some(p) => p.to_path_buf(),
        None => config_path(),
    };

    let config: Config = figment(&file).extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize `cfg` to TOML and write it to `path`, creating parent dirs.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_toml(cfg)?)?;
    Ok(())
}

pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}
