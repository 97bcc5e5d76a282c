//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod refresh_token;
pub mod register;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use refresh_token::RefreshTokenUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{IssuedToken, TokenService};
