//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<UserId> {
        let user_name = UserName::new(input.user_name)?;
        let raw_password = RawPassword::new(input.password)?;

        // Fast path; the unique constraint on insert is authoritative.
        if self.repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let cost = self.config.password_cost;
        let password =
            tokio::task::spawn_blocking(move || UserPassword::from_raw(&raw_password, cost))
                .await??;

        let user = User::new(user_name, password);
        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(user.user_id)
    }
}
