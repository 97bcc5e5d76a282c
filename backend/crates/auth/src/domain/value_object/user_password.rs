//! User Password Value Object
//!
//! Domain wrappers around `platform::password`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("squat-rack-42".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, 4).unwrap();
//! assert!(hashed.verify(&raw));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a raw password
    ///
    /// Any non-empty password up to 72 bytes is accepted.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::Empty => {
                AppError::bad_request("Password is required").with_action("Please enter a password")
            }
            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} bytes (got {})",
                max, actual
            ))
            .with_action("Please choose a shorter password"),
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// bcrypt hash as stored in `users.password_hash`
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password at the given bcrypt cost
    ///
    /// Blocking; call from `spawn_blocking` in async code.
    pub fn from_raw(raw: &RawPassword, cost: u32) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(cost)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;

        Ok(Self(hashed))
    }

    /// Rebuild from the stored hash string
    pub fn from_hash_string(hash: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_hash_string(hash)
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn as_hash_str(&self) -> &str {
        self.0.as_str()
    }

    /// Blocking; call from `spawn_blocking` in async code.
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const COST: u32 = 4;

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("ValidPass123!".to_string()).is_ok());
        assert!(RawPassword::new("x".to_string()).is_ok());
        assert!(RawPassword::new("   ".to_string()).is_ok());

        assert!(RawPassword::new("".to_string()).is_err());
        assert!(RawPassword::new("a".repeat(73)).is_err());
    }

    #[test]
    fn test_empty_password_is_bad_request() {
        let err = RawPassword::new("".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Password is required");
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, COST).unwrap();

        assert!(hashed.verify(&raw));

        let wrong = RawPassword::new("WrongPassword123!".to_string()).unwrap();
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_hash_string_roundtrip() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, COST).unwrap();

        let stored = hashed.as_hash_str().to_string();
        let restored = UserPassword::from_hash_string(stored).unwrap();

        assert!(restored.verify(&raw));
    }

    #[test]
    fn test_corrupt_stored_hash_is_internal() {
        let err = UserPassword::from_hash_string("plaintext").unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw, COST).unwrap();
        let debug = format!("{:?}", hashed);
        assert!(debug.contains("HASH"));
    }

    #[test]
    fn test_unicode_password() {
        let raw = RawPassword::new("最も安全なパスワード".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, COST).unwrap();
        assert!(hashed.verify(&raw));
    }
}
