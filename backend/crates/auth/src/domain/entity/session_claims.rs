//! Session Claims
//!
//! The payload carried inside a signed session token. Exists only inside
//! the token; there is no server-side session table.

use chrono::{DateTime, TimeZone, Utc};
use kernel::current_user::CurrentUser;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_id::UserId;

/// Wire names: `username`, `userId`, `exp` (Unix seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub username: String,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl SessionClaims {
    pub fn new(user_id: UserId, username: impl Into<String>, expires_at: i64) -> Self {
        Self {
            username: username.into(),
            user_id,
            expires_at,
        }
    }

    /// Seconds of validity left at `now` (negative once expired)
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        self.expires_at - now.timestamp()
    }

    /// Expired when `exp <= now`; no leeway
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.remaining_secs(now) <= 0
    }

    pub fn expires_at_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at, 0).single()
    }

    /// Identity handed to downstream handlers
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser::new(self.user_id, self.username.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_wire_field_names() {
        let user_id = UserId::new();
        let claims = SessionClaims::new(user_id, "a@example.com", 1_700_000_000);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["username"], "a@example.com");
        assert_eq!(json["userId"], user_id.to_string());
        assert_eq!(json["exp"], 1_700_000_000);
    }

    #[test]
    fn test_expiry_has_no_leeway() {
        let now = Utc::now();
        let at_now = SessionClaims::new(UserId::new(), "a@example.com", now.timestamp());
        assert!(at_now.is_expired_at(now));

        let later = SessionClaims::new(
            UserId::new(),
            "a@example.com",
            (now + Duration::seconds(1)).timestamp(),
        );
        assert!(!later.is_expired_at(now));
        assert_eq!(later.remaining_secs(now), 1);
    }

    #[test]
    fn test_current_user() {
        let user_id = UserId::new();
        let claims = SessionClaims::new(user_id, "a@example.com", 0);
        let user = claims.current_user();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.username, "a@example.com");
    }
}
