//! List Sets Use Case
//!
//! Returns one page of the caller's sets, newest first.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::WorkoutConfig;
use crate::domain::entities::Set;
use crate::domain::repository::SetRepository;
use crate::domain::value_objects::Page;
use crate::error::SetResult;

/// Raw query values; parsing is lenient
#[derive(Debug, Default)]
pub struct ListSetsInput {
    pub skip: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug)]
pub struct ListSetsOutput {
    pub page: Page,
    pub sets: Vec<Set>,
}

pub struct ListSetsUseCase<R>
where
    R: SetRepository,
{
    repo: Arc<R>,
    config: Arc<WorkoutConfig>,
}

impl<R> ListSetsUseCase<R>
where
    R: SetRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<WorkoutConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: ListSetsInput,
    ) -> SetResult<ListSetsOutput> {
        let page = Page::clamped(
            input.skip.as_deref(),
            input.limit.as_deref(),
            self.config.max_page_size,
        );

        let sets = self.repo.list(user_id, page).await?;

        Ok(ListSetsOutput { page, sets })
    }
}
