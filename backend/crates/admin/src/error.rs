//! Admin Error Types
//!
//! This module provides admin-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Admin-specific result type alias
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-specific error variants
#[derive(Debug, Error)]
pub enum AdminError {
    /// Wrong admin password
    #[error("Invalid password")]
    InvalidPassword,

    /// Missing, expired or tampered session cookie
    #[error("Unauthorized")]
    Unauthorized,

    /// Version token mismatch: content changed between read and write
    #[error("Content was modified concurrently")]
    Conflict,

    /// Content repository unreachable or rejected for a non-version reason
    #[error("{0}")]
    Upstream(String),

    /// Required secrets not configured
    #[error("Server is missing required secrets")]
    MissingSecrets,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::InvalidPassword | AdminError::Unauthorized => StatusCode::UNAUTHORIZED,
            AdminError::Conflict => StatusCode::CONFLICT,
            AdminError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AdminError::MissingSecrets | AdminError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::InvalidPassword | AdminError::Unauthorized => ErrorKind::Unauthorized,
            AdminError::Conflict => ErrorKind::Conflict,
            AdminError::Upstream(_) => ErrorKind::BadGateway,
            AdminError::MissingSecrets | AdminError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdminError::Upstream(msg) => {
                tracing::error!(message = %msg, "Content repository error");
            }
            AdminError::Conflict => {
                tracing::warn!("Concurrent content modification detected");
            }
            AdminError::InvalidPassword => {
                tracing::warn!("Invalid login attempt");
            }
            AdminError::MissingSecrets => {
                tracing::error!("Required secrets are not configured");
            }
            AdminError::Internal(msg) => {
                tracing::error!(message = %msg, "Admin internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Admin error");
            }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AdminError {
    fn from(err: AppError) -> Self {
        AdminError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Internal(format!("JSON serialization failed: {err}"))
    }
}
