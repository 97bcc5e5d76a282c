//! Delete Set Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::SetRepository;
use crate::domain::value_objects::SetId;
use crate::error::{SetError, SetResult};

pub struct DeleteSetUseCase<R>
where
    R: SetRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteSetUseCase<R>
where
    R: SetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: SetId, user_id: UserId) -> SetResult<()> {
        let affected = self.repo.delete(id, user_id).await?;
        if affected == 0 {
            return Err(SetError::NotFound);
        }

        tracing::info!(user_id = %user_id, set_id = %id, "Set deleted");
        Ok(())
    }
}
