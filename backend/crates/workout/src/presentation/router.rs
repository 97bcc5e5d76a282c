//! Workout Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::WorkoutConfig;
use crate::domain::repository::SetRepository;
use crate::infra::postgres::PgSetRepository;
use crate::presentation::handlers::{self, WorkoutAppState};

/// Create the sets router with PostgreSQL repository
pub fn workout_router(repo: PgSetRepository, config: Arc<WorkoutConfig>) -> Router {
    workout_router_generic(repo, config)
}

/// Create a generic sets router for any repository implementation
///
/// Handlers expect a `CurrentUser` in the request extensions; the caller
/// layers the auth middleware on top before nesting.
pub fn workout_router_generic<R>(repo: R, config: Arc<WorkoutConfig>) -> Router
where
    R: SetRepository + Clone + Send + Sync + 'static,
{
    let state = WorkoutAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_sets::<R>).post(handlers::create_set::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_set::<R>)
                .put(handlers::update_set::<R>)
                .delete(handlers::delete_set::<R>),
        )
        .with_state(state)
}
