//! Get Set Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Set;
use crate::domain::repository::SetRepository;
use crate::domain::value_objects::SetId;
use crate::error::{SetError, SetResult};

pub struct GetSetUseCase<R>
where
    R: SetRepository,
{
    repo: Arc<R>,
}

impl<R> GetSetUseCase<R>
where
    R: SetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: SetId, user_id: UserId) -> SetResult<Set> {
        self.repo
            .find(id, user_id)
            .await?
            .ok_or(SetError::NotFound)
    }
}
