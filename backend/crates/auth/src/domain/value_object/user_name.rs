//! User Name Value Object
//!
//! The login handle. It must be shaped like an email address; it is stored
//! trimmed and lower-cased so lookups are case-insensitive. No verification
//! mail is sent, so only the shape is checked.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length (per RFC 5321)
pub const USER_NAME_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Normalize and validate
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let user_name = raw.into().trim().to_lowercase();

        if user_name.is_empty() {
            return Err(AppError::bad_request("Username is required")
                .with_action("Enter an email address as the username"));
        }

        if user_name.len() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if !Self::is_email_shaped(&user_name) {
            return Err(AppError::bad_request("Username must be a valid email address")
                .with_action("Enter an email address as the username"));
        }

        Ok(Self(user_name))
    }

    fn is_email_shaped(s: &str) -> bool {
        let Some((local, domain)) = s.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return false;
        }
        if local.chars().any(|c| c.is_whitespace() || c.is_control() || c == '@') {
            return false;
        }
        if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Every label non-empty and not hyphen-bounded
        domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
    }

    /// Rebuild from a stored value (already normalized)
    pub fn from_db(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserName {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        UserName::new(s)
    }
}

impl TryFrom<String> for UserName {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        UserName::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
