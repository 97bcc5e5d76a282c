//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body or field failed validation
    #[error("{0}")]
    Validation(AppError),

    /// User name already registered
    #[error("User name already exists")]
    UserNameTaken,

    #[error("User not found")]
    UserNotFound,

    /// Wrong password
    #[error("Unauthorized")]
    InvalidCredentials,

    /// No `token` cookie on a protected route
    #[error("Missing authentication token")]
    TokenMissing,

    /// Not a JWT, or the payload does not decode into claims
    #[error("Malformed authentication token")]
    TokenMalformed,

    #[error("Invalid token signature")]
    TokenSignatureInvalid,

    #[error("Token expired")]
    TokenExpired,

    /// Refresh requested while the current token still has plenty of life
    #[error("Token is not within the refresh window yet")]
    RefreshTooEarly,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(err) => err.kind(),
            AuthError::UserNameTaken | AuthError::TokenMalformed | AuthError::RefreshTooEarly => {
                ErrorKind::BadRequest
            }
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenSignatureInvalid
            | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Validation(err) => err,
            AuthError::TokenExpired => {
                AppError::unauthorized("Token expired").with_action("Log in again")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenSignatureInvalid => {
                tracing::warn!("Token with invalid signature presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

/// Client-side `AppError`s raised by value objects stay 4xx
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err)
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("blocking task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: AuthError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(AuthError::Validation(AppError::bad_request("x"))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AuthError::UserNameTaken), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AuthError::UserNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AuthError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AuthError::TokenMissing), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::TokenMalformed), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AuthError::TokenSignatureInvalid),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AuthError::TokenExpired), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::RefreshTooEarly), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AuthError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AuthError::Database(sqlx::Error::PoolTimedOut)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_app_error_keeps_client_errors() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::Validation(_)));

        let err: AuthError = AppError::internal("oops").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_validation_message_is_preserved() {
        let app = AuthError::Validation(AppError::bad_request("Invalid email format"))
            .into_app_error();
        assert_eq!(app.message(), "Invalid email format");
    }

    #[test]
    fn test_user_not_found_message() {
        let app = AuthError::UserNotFound.into_app_error();
        assert_eq!(app.message(), "User not found");
    }
}
