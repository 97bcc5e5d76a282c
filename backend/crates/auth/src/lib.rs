//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with an email-shaped user name and a password
//! - Login issuing a short-lived HS256 token in an HttpOnly `token` cookie
//! - Token refresh, allowed only close to expiry
//! - `require_auth` middleware exposing the caller as `kernel::current_user::CurrentUser`
//!
//! ## Security Model
//! - Passwords hashed with bcrypt on the blocking pool
//! - Tokens are stateless; expiry is checked without leeway

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_auth};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
