//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(
    repo: PgAuthRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router {
    auth_router_generic(repo, config, tokens)
}

/// Create a generic Auth router for any repository implementation
///
/// `/register` and `/login` are public; `/refresh` and `/heartbeat`
/// require a valid session token.
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let guard = AuthMiddlewareState::new(config.clone(), tokens.clone());
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        tokens,
    };

    let protected = Router::new()
        .route("/refresh", post(handlers::refresh::<R>))
        .route("/heartbeat", get(handlers::heartbeat))
        .route_layer(from_fn_with_state(guard, require_auth));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
