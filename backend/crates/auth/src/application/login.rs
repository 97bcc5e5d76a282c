//! Login Use Case
//!
//! Checks credentials and issues a session token.

use std::sync::Arc;

use kernel::error::app_error::AppError;

use crate::application::token::{IssuedToken, TokenService};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Unknown user name is `UserNotFound`, a wrong password is
    /// `InvalidCredentials`.
    ///
    /// Only an empty password is rejected up front; anything else is left
    /// to the hash comparison, after the user lookup.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<IssuedToken> {
        let user_name = UserName::new(input.user_name)?;
        if input.password.is_empty() {
            return Err(AppError::bad_request("Password is required")
                .with_action("Please enter a password")
                .into());
        }

        let user = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Longer than bcrypt can have hashed at registration
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let stored = user.password.clone();
        let matches =
            tokio::task::spawn_blocking(move || stored.verify(&raw_password)).await?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(user.user_id, user.user_name.as_str())?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(issued)
    }
}
