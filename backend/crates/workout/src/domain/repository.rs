//! Set Repository Trait
//!
//! Every operation takes the owner's `user_id`; a set belonging to
//! someone else behaves exactly like one that does not exist.

use kernel::id::UserId;

use super::entities::Set;
use super::value_objects::{Page, SetDraft, SetId};
use crate::error::SetResult;

#[trait_variant::make(SetRepository: Send)]
pub trait LocalSetRepository {
    async fn find(&self, id: SetId, user_id: UserId) -> SetResult<Option<Set>>;

    /// Newest-created first, ties broken by id descending
    async fn list(&self, user_id: UserId, page: Page) -> SetResult<Vec<Set>>;

    async fn create(&self, user_id: UserId, draft: &SetDraft) -> SetResult<Set>;

    /// Returns the number of rows updated (0 or 1)
    async fn update(&self, id: SetId, user_id: UserId, draft: &SetDraft) -> SetResult<u64>;

    /// Returns the number of rows deleted (0 or 1)
    async fn delete(&self, id: SetId, user_id: UserId) -> SetResult<u64>;
}
