//! Password Hashing and Verification
//!
//! bcrypt-based password handling with:
//! - Zeroization of clear text
//! - Configurable cost factor
//! - Redacted debug output
//!
//! Hashing is CPU-bound. Async callers should run [`ClearTextPassword::hash`]
//! and [`HashedPassword::verify`] inside `tokio::task::spawn_blocking`.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password cannot be empty")]
    Empty,

    #[error("Password must be at most {max} bytes (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] bcrypt::BcryptError),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`. Debug output is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
/// let hashed = password.hash(4).unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate and wrap a raw password
    ///
    /// Any non-empty input up to [`MAX_PASSWORD_BYTES`] is accepted as is,
    /// including whitespace and control characters.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        if raw.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_BYTES,
                actual: raw.len(),
            });
        }

        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with bcrypt at the given cost (clamped to the bcrypt range)
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let cost = cost.clamp(MIN_COST, MAX_COST);
        let hash = bcrypt::hash(self.as_bytes(), cost)?;
        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$<cost>$<salt+hash>`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored hash, rejecting anything that is not bcrypt-shaped
    pub fn from_hash_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        let well_formed = hash.len() == 60
            && matches!(hash.get(..4), Some("$2a$" | "$2b$" | "$2x$" | "$2y$"))
            && hash.get(6..7) == Some("$");
        if !well_formed {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// A malformed hash verifies as `false`.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_bytes(), &self.hash).unwrap_or(false)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
