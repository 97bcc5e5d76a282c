//! Auth Middleware
//!
//! Guards protected routes with the session token cookie.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::cookie::extract_cookie;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl AuthMiddlewareState {
    pub fn new(config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self { config, tokens }
    }
}

/// Middleware that requires a valid session token
///
/// On success the request carries the token's `SessionClaims` and a
/// `kernel::current_user::CurrentUser` in its extensions.
///
/// ```ignore
/// router.route_layer(axum::middleware::from_fn_with_state(state, require_auth))
/// ```
pub async fn require_auth(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_cookie(req.headers(), &state.config.token_cookie_name)
        .ok_or(AuthError::TokenMissing)?;

    let claims = state.tokens.validate(&token)?;

    req.extensions_mut().insert(claims.current_user());
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
