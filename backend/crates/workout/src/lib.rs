//! Workout Sets
//!
//! Per-user CRUD over logged sets. Every repository call is scoped to the
//! owner's `user_id`, so another user's set is indistinguishable from a
//! missing one.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


pub use application::config::WorkoutConfig;
pub use error::{SetError, SetResult};
pub use infra::postgres::PgSetRepository;
pub use presentation::router::{workout_router, workout_router_generic};
