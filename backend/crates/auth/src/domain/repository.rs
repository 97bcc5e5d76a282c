//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// A duplicate user name must surface as `AuthError::UserNameTaken`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by (normalized) user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}
