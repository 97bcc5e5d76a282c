//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_id::UserId;

/// Body of `POST /register` and `POST /login`
///
/// Missing fields decode as empty strings so validation can name them.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by login and refresh; the token itself only travels in the cookie
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: UserId,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: CredentialsRequest = serde_json::from_str(r#"{"username":"a@b.io"}"#).unwrap();
        assert_eq!(req.username, "a@b.io");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_session_response_is_camel_case() {
        let json = serde_json::to_value(SessionResponse {
            user_id: UserId::new(),
            username: "a@b.io".into(),
            expires_at: Utc::now(),
        })
        .unwrap();

        assert!(json.get("userId").is_some());
        assert!(json.get("expiresAt").is_some());
        assert!(json.get("token").is_none());
    }
}
