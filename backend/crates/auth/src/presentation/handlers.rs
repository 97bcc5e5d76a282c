//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::Utc;
use kernel::error::app_error::AppError;
use platform::cookie::set_cookie_header;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenService};
use crate::application::{
    LoginInput, LoginUseCase, RefreshTokenUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CredentialsRequest, SessionResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .execute(RegisterInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(StatusCode::CREATED)
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());
    let issued = use_case
        .execute(LoginInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    session_response(&state.config, issued)
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/refresh (behind `require_auth`)
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<SessionClaims>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let issued = RefreshTokenUseCase::new(state.tokens.clone()).execute(&claims)?;

    session_response(&state.config, issued)
}

// ============================================================================
// Heartbeat
// ============================================================================

/// GET /api/heartbeat (behind `require_auth`)
pub async fn heartbeat() -> &'static str {
    "OK"
}

// ============================================================================
// Helpers
// ============================================================================

fn session_response(
    config: &AuthConfig,
    issued: IssuedToken,
) -> AuthResult<(StatusCode, [(header::HeaderName, HeaderValue); 1], Json<SessionResponse>)> {
    let expires_at = issued
        .expires_at()
        .ok_or_else(|| AuthError::Internal("token expiry out of range".into()))?;

    let cookie = set_cookie_header(
        &config.cookie_config(),
        &issued.token,
        Some(expires_at),
        Utc::now(),
    )
    .map_err(|e| AuthError::Internal(format!("invalid cookie header: {e}")))?;

    let body = SessionResponse {
        user_id: issued.claims.user_id,
        username: issued.claims.username,
        expires_at,
    };

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(body)))
}
