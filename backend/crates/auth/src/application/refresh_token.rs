//! Refresh Token Use Case
//!
//! Re-issues a session token that is close to expiry.

use std::sync::Arc;

use chrono::Utc;

use crate::application::token::{IssuedToken, TokenService};
use crate::domain::entity::session_claims::SessionClaims;
use crate::error::AuthResult;

pub struct RefreshTokenUseCase {
    tokens: Arc<TokenService>,
}

impl RefreshTokenUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// `claims` must come from a token the middleware already validated.
    pub fn execute(&self, claims: &SessionClaims) -> AuthResult<IssuedToken> {
        let issued = self.tokens.refresh_at(claims, Utc::now())?;

        tracing::debug!(user_id = %claims.user_id, "Session token refreshed");

        Ok(issued)
    }
}
