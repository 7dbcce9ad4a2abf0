// ── Core error types ──
//
// Domain errors raised by the validation layer and the device store.
// Consumers never see status codes here; netinv-api owns the mapping
// from these variants to HTTP responses.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::DeviceId;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error("Validation failed: {}", join_fields(.errors))]
    Validation { errors: Vec<FieldError> },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Device not found: {id}")]
    NotFound { id: DeviceId },

    #[error("Device id already in use: {id}")]
    DuplicateId { id: DeviceId },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Device store unavailable")]
    StoreUnavailable,

    #[error("Device id space exhausted")]
    IdsExhausted,
}

impl CoreError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// Field-level detail, empty for everything but validation failures.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors } => errors,
            _ => &[],
        }
    }

    /// True for failures caused by the system rather than the caller.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::StoreUnavailable | Self::IdsExhausted)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
