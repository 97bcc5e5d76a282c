//! Workout Entities

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use super::value_objects::SetId;

/// One logged set, as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub id: SetId,
    pub user_id: UserId,
    pub weight: f64,
    pub exercise: String,
    pub repetitions: i32,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}
