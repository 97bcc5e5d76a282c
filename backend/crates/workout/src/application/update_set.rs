//! Update Set Use Case
//!
//! Overwrites weight, exercise and repetitions, then re-reads the row
//! so the caller sees the stored values (including the new `modified`).

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Set;
use crate::domain::repository::SetRepository;
use crate::domain::value_objects::{SetDraft, SetId};
use crate::error::{SetError, SetResult};

pub struct UpdateSetUseCase<R>
where
    R: SetRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateSetUseCase<R>
where
    R: SetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: SetId, user_id: UserId, draft: SetDraft) -> SetResult<Set> {
        let affected = self.repo.update(id, user_id, &draft).await?;
        if affected == 0 {
            return Err(SetError::NotFound);
        }

        tracing::info!(user_id = %user_id, set_id = %id, "Set updated");

        // Deleted between the two statements
        self.repo.find(id, user_id).await?.ok_or(SetError::NotFound)
    }
}
