//! Error conversions and the HTTP rendering used by every crate
//!
//! Storage errors are not converted here: each crate wraps `sqlx::Error`
//! in its own `Database` variant and only asks whether it was a unique
//! constraint violation.

use super::app_error::AppError;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// Returns `true` when `err` is a PostgreSQL unique constraint violation (23505)
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    // https://www.postgresql.org/docs/current/errcodes-appendix.html
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Message sent in place of the real one for 5xx responses
pub const GENERIC_SERVER_ERROR: &str = "Internal server error";

impl AppError {
    /// JSON body sent to the client: `{"error": ..., "action": ...}`
    ///
    /// Server errors never leak their message; `action` is omitted when unset.
    pub fn to_body(&self) -> serde_json::Value {
        let message = if self.is_server_error() {
            GENERIC_SERVER_ERROR
        } else {
            self.message()
        };

        let mut body = serde_json::json!({ "error": message });
        if let Some(action) = self.action() {
            body["action"] = serde_json::Value::from(action);
        }
        body
    }
}

/// Malformed or missing JSON body
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request("Invalid request payload").with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_for_client_error() {
        let body = AppError::bad_request("Invalid set ID").to_body();
        assert_eq!(body, serde_json::json!({ "error": "Invalid set ID" }));
    }

    #[test]
    fn test_body_includes_action() {
        let body = AppError::unauthorized("Token expired")
            .with_action("Log in again")
            .to_body();
        assert_eq!(body["error"], "Token expired");
        assert_eq!(body["action"], "Log in again");
    }

    #[test]
    fn test_body_hides_server_error_message() {
        let body = AppError::internal("relation \"sets\" does not exist").to_body();
        assert_eq!(body["error"], GENERIC_SERVER_ERROR);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::bad_request("Invalid set ID").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
