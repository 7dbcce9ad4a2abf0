// ── HTTP error mapping ──
//
// Every failure leaving the API is an `ApiError`. Domain errors keep their
// meaning; transport-only failures (unparseable bodies, bad path segments)
// are folded into the same "invalid input" class. Internal failures are
// logged in full and reported generically.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use netinv_core::{CoreError, FieldError};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid device id: {0}")]
    InvalidPath(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Middleware failure: {0}")]
    Middleware(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::Validation { .. })
            | Self::InvalidBody(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Core(CoreError::NotFound { .. }) | Self::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::Core(CoreError::DuplicateId { .. }) => StatusCode::CONFLICT,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Core(CoreError::StoreUnavailable | CoreError::IdsExhausted)
            | Self::Middleware(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error class.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Core(CoreError::Validation { .. })
            | Self::InvalidBody(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_) => "invalid_input",
            Self::Core(CoreError::NotFound { .. }) | Self::RouteNotFound { .. } => "not_found",
            Self::Core(CoreError::DuplicateId { .. }) => "conflict",
            Self::MethodNotAllowed { .. } => "method_not_allowed",
            Self::Timeout => "timeout",
            Self::Core(CoreError::StoreUnavailable | CoreError::IdsExhausted)
            | Self::Middleware(_) => "internal_error",
        }
    }

    /// Failures of the service itself; logged in full, reported generically.
    pub fn is_internal(&self) -> bool {
        match self {
            Self::Core(err) => err.is_internal(),
            Self::Middleware(_) => true,
            _ => false,
        }
    }

    fn fields(&self) -> Vec<FieldError> {
        match self {
            Self::Core(err) => err.field_errors().to_vec(),
            Self::InvalidPath(_) => vec![FieldError::new("id", "must be a positive integer")],
            _ => Vec::new(),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        let status = err.status_code();
        let message = if err.is_internal() {
            "Internal server error".to_owned()
        } else {
            err.to_string()
        };
        Self {
            error: err.code(),
            message,
            status: status.as_u16(),
            fields: err.fields(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            error!(error = %self, "request failed with internal error");
        }
        (self.status_code(), Json(ErrorBody::from(&self))).into_response()
    }
}
