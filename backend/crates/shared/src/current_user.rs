//! Authenticated caller identity
//!
//! The auth middleware inserts a [`CurrentUser`] into the request extensions
//! after validating the session token. Resource crates only depend on this
//! type, never on the auth crate itself.

use crate::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
}

impl CurrentUser {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| crate::error::app_error::AppError::unauthorized("Unauthorized"))
    }
}
