//! Workout Error Types
//!
//! This module provides set-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Workout-specific result type alias
pub type SetResult<T> = Result<T, SetError>;

#[derive(Debug, Error)]
pub enum SetError {
    /// Body, query or field failed validation
    #[error("{0}")]
    Validation(AppError),

    /// Path segment is not an integer
    #[error("Invalid set ID")]
    InvalidId,

    /// No such set for this owner (including sets owned by someone else)
    #[error("Set not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SetError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SetError::Validation(err) => err.kind(),
            SetError::InvalidId => ErrorKind::BadRequest,
            SetError::NotFound => ErrorKind::NotFound,
            SetError::Database(_) | SetError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            SetError::Validation(err) => err,
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SetError::Database(e) => {
                tracing::error!(error = %e, "Workout database error");
            }
            SetError::Internal(msg) => {
                tracing::error!(message = %msg, "Workout internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Workout error");
            }
        }
    }
}

impl IntoResponse for SetError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for SetError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            SetError::Validation(err)
        } else {
            SetError::Internal(err.to_string())
        }
    }
}
