//! PostgreSQL Set Repository
//!
//! `weight` is `NUMERIC(10,2)` in the table; it is written through an
//! explicit cast and read back as `float8`.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Set;
use crate::domain::repository::SetRepository;
use crate::domain::value_objects::{Page, SetDraft, SetId};
use crate::error::SetResult;

#[derive(Clone)]
pub struct PgSetRepository {
    pool: PgPool,
}

impl PgSetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SetRepository for PgSetRepository {
    async fn find(&self, id: SetId, user_id: UserId) -> SetResult<Option<Set>> {
        let row = sqlx::query_as::<_, SetRow>(
            r#"
            SELECT
                id,
                user_id,
                weight::float8 AS weight,
                exercise,
                repetitions,
                created,
                modified
            FROM sets
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.value())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SetRow::into_set))
    }

    async fn list(&self, user_id: UserId, page: Page) -> SetResult<Vec<Set>> {
        let rows = sqlx::query_as::<_, SetRow>(
            r#"
            SELECT
                id,
                user_id,
                weight::float8 AS weight,
                exercise,
                repetitions,
                created,
                modified
            FROM sets
            WHERE user_id = $1
            ORDER BY created DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SetRow::into_set).collect())
    }

    async fn create(&self, user_id: UserId, draft: &SetDraft) -> SetResult<Set> {
        let row = sqlx::query_as::<_, SetRow>(
            r#"
            INSERT INTO sets (
                user_id,
                weight,
                exercise,
                repetitions,
                created,
                modified
            ) VALUES ($1, CAST($2 AS NUMERIC(10,2)), $3, $4, $5, $5)
            RETURNING
                id,
                user_id,
                weight::float8 AS weight,
                exercise,
                repetitions,
                created,
                modified
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(draft.weight.value())
        .bind(draft.exercise.as_str())
        .bind(draft.repetitions.value())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_set())
    }

    async fn update(&self, id: SetId, user_id: UserId, draft: &SetDraft) -> SetResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE sets
            SET weight = CAST($3 AS NUMERIC(10,2)),
                exercise = $4,
                repetitions = $5,
                modified = $6
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.value())
        .bind(user_id.as_uuid())
        .bind(draft.weight.value())
        .bind(draft.exercise.as_str())
        .bind(draft.repetitions.value())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: SetId, user_id: UserId) -> SetResult<u64> {
        let result = sqlx::query("DELETE FROM sets WHERE id = $1 AND user_id = $2")
            .bind(id.value())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct SetRow {
    id: i32,
    user_id: Uuid,
    weight: f64,
    exercise: String,
    repetitions: i32,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl SetRow {
    fn into_set(self) -> Set {
        Set {
            id: SetId::new(self.id),
            user_id: UserId::from_uuid(self.user_id),
            weight: self.weight,
            exercise: self.exercise,
            repetitions: self.repetitions,
            created: self.created,
            modified: self.modified,
        }
    }
}
