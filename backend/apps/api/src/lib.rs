//! API application assembly
//!
//! Wires the `auth` and `workout` routers together behind CORS and request
//! tracing. `main.rs` only loads settings, connects, migrates and serves.

pub mod settings;

use std::sync::Arc;

use anyhow::Context;
use auth::{AuthMiddlewareState, PgAuthRepository, TokenService, auth_router, require_auth};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
};
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use workout::{PgSetRepository, WorkoutConfig, workout_router};

pub use settings::Settings;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the full application router
///
/// * `/api/register`, `/api/login` – public
/// * `/api/refresh`, `/api/heartbeat` – session cookie required
/// * `/api/v1/sets[/{id}]` – session cookie required
pub fn build_app(pool: PgPool, settings: &Settings) -> anyhow::Result<Router> {
    let config = Arc::new(settings.auth.clone());
    let tokens = Arc::new(
        TokenService::from_config(&config)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("Invalid token settings")?,
    );

    let sets = workout_router(
        PgSetRepository::new(pool.clone()),
        Arc::new(WorkoutConfig::default()),
    )
    .route_layer(from_fn_with_state(
        AuthMiddlewareState::new(config.clone(), tokens.clone()),
        require_auth,
    ));

    Ok(Router::new()
        .nest("/api", auth_router(PgAuthRepository::new(pool), config, tokens))
        .nest("/api/v1/sets", sets)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.frontend_origins)))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
