//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(user.password.as_hash_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UserNameTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                password_hash,
                created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(user_name.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password = UserPassword::from_hash_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            user_name: UserName::from_db(self.username),
            password,
            created_at: self.created_at,
        })
    }
}
