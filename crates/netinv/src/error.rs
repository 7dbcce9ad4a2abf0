//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` and startup failures into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use netinv_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const CONFIG: i32 = 3;
    pub const UNAVAILABLE: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(netinv::no_config),
        help("Create one with: netinv config init\nOr omit --config to use the defaults.")
    )]
    NoConfig { path: String },

    #[error("Configuration file already exists: {path}")]
    #[diagnostic(
        code(netinv::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error("Invalid seed device #{index} in [[inventory.devices]]")]
    #[diagnostic(
        code(netinv::invalid_seed),
        help("Seed entries take the same fields as POST /devices: name, ip_address, device_type, status.")
    )]
    InvalidSeed {
        index: usize,
        #[source]
        source: netinv_core::CoreError,
    },

    #[error("Could not load seed devices into the inventory")]
    #[diagnostic(
        code(netinv::seed_rejected),
        help("Explicit ids in [[inventory.devices]] must be unique and must not collide with the sample devices (1-3).")
    )]
    SeedRejected(#[source] netinv_core::CoreError),

    #[error(transparent)]
    #[diagnostic(
        code(netinv::config),
        help("Inspect the resolved configuration with: netinv config show")
    )]
    Config(ConfigError),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(netinv::validation))]
    Validation { field: String, reason: String },

    // ── Server ───────────────────────────────────────────────────────

    #[error("Could not bind to {addr}")]
    #[diagnostic(
        code(netinv::bind_failed),
        help("Check that the address is valid and the port is not already in use.\nOverride with --host / --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Device store unavailable")]
    #[diagnostic(code(netinv::store))]
    Store(#[source] netinv_core::CoreError),

    #[error("Server error")]
    #[diagnostic(code(netinv::server))]
    Server(#[source] std::io::Error),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoConfig { .. }
            | Self::ConfigExists { .. }
            | Self::InvalidSeed { .. }
            | Self::SeedRejected(_)
            | Self::Config(_)
            | Self::Validation { .. } => exit_code::CONFIG,
            Self::Bind { .. } => exit_code::UNAVAILABLE,
            Self::Store(_) | Self::Server(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Missing { path } => CliError::NoConfig {
                path: path.display().to_string(),
            },
            ConfigError::InvalidSeed { index, source } => CliError::InvalidSeed { index, source },
            ConfigError::Io(err) => CliError::Io(err),
            other => CliError::Config(other),
        }
    }
}
