//! Create Set Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Set;
use crate::domain::repository::SetRepository;
use crate::domain::value_objects::SetDraft;
use crate::error::SetResult;

pub struct CreateSetUseCase<R>
where
    R: SetRepository,
{
    repo: Arc<R>,
}

impl<R> CreateSetUseCase<R>
where
    R: SetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, draft: SetDraft) -> SetResult<Set> {
        let set = self.repo.create(user_id, &draft).await?;

        tracing::info!(
            user_id = %user_id,
            set_id = %set.id,
            exercise = %set.exercise,
            "Set created"
        );

        Ok(set)
    }
}
