//! Entity Module

pub mod session_claims;
pub mod user;

pub use session_claims::SessionClaims;
pub use user::User;
