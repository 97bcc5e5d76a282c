//! Session Token Service
//!
//! Issues and validates HS256-signed session tokens carrying
//! [`SessionClaims`], and applies the refresh-window policy.
//!
//! Validation is a pure function of (token, now, secret):
//!
//! | Outcome | Error |
//! |---|---|
//! | not a JWT, undecodable, wrong payload shape | `TokenMalformed` (400) |
//! | signature does not verify | `TokenSignatureInvalid` (401) |
//! | `exp <= now` | `TokenExpired` (401) |
//! | otherwise | `Ok(claims)` |
//!
//! A missing token never reaches this service; the middleware reports it.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::application::config::AuthConfig;
use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// A freshly signed token and the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: SessionClaims,
}

impl IssuedToken {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claims.expires_at_datetime()
    }
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    ttl_secs: i64,
    refresh_window: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .field("refresh_window", &self.refresh_window)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Build a service signing with `secret`
    ///
    /// Fails when the secret is empty or the refresh window is not shorter
    /// than the TTL (a refresh must always extend the expiry).
    pub fn new(secret: &[u8], ttl: Duration, refresh_window: Duration) -> AuthResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::Internal("token secret must not be empty".into()));
        }
        if ttl.as_secs() == 0 || refresh_window >= ttl {
            return Err(AuthError::Internal(
                "token TTL must be positive and longer than the refresh window".into(),
            ));
        }
        let ttl_secs = i64::try_from(ttl.as_secs())
            .map_err(|_| AuthError::Internal("token TTL is out of range".into()))?;

        // Expiry is checked by hand so that `exp <= now` is rejected with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
            ttl_secs,
            refresh_window,
        })
    }

    pub fn from_config(config: &AuthConfig) -> AuthResult<Self> {
        Self::new(&config.token_secret, config.token_ttl, config.refresh_window)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn refresh_window(&self) -> Duration {
        self.refresh_window
    }

    pub fn issue(&self, user_id: UserId, username: &str) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// Sign a token expiring `ttl` after `now`
    pub fn issue_at(
        &self,
        user_id: UserId,
        username: &str,
        now: DateTime<Utc>,
    ) -> AuthResult<IssuedToken> {
        let expires_at = now
            .timestamp()
            .checked_add(self.ttl_secs)
            .ok_or_else(|| AuthError::Internal("token expiry out of range".into()))?;
        let claims = SessionClaims::new(user_id, username, expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))?;

        Ok(IssuedToken { token, claims })
    }

    pub fn validate(&self, token: &str) -> AuthResult<SessionClaims> {
        self.validate_at(token, Utc::now())
    }

    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<SessionClaims> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                    AuthError::TokenSignatureInvalid
                }
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenMalformed,
            })?;

        let claims = data.claims;
        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    /// Re-issue for the holder of `claims`
    ///
    /// Rejected with `RefreshTooEarly` while more than `refresh_window`
    /// of validity remains.
    pub fn refresh_at(
        &self,
        claims: &SessionClaims,
        now: DateTime<Utc>,
    ) -> AuthResult<IssuedToken> {
        if claims.remaining_secs(now) > self.refresh_window.as_secs() as i64 {
            return Err(AuthError::RefreshTooEarly);
        }

        self.issue_at(claims.user_id, &claims.username, now)
    }
}
