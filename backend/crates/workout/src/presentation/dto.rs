//! Request / response bodies for the sets API

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Set;
use crate::domain::value_objects::SetId;

/// Body of POST and PUT
///
/// Every field is optional here so that a missing one is reported by name.
#[derive(Debug, Deserialize)]
pub struct SetRequest {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub exercise: Option<String>,
    #[serde(default)]
    pub repetitions: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetResponse {
    pub id: SetId,
    pub user_id: UserId,
    pub weight: f64,
    pub exercise: String,
    pub repetitions: i32,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl From<Set> for SetResponse {
    fn from(set: Set) -> Self {
        Self {
            id: set.id,
            user_id: set.user_id,
            weight: set.weight,
            exercise: set.exercise,
            repetitions: set.repetitions,
            created: set.created,
            modified: set.modified,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SetListResponse {
    /// Number of sets in this page
    pub results: usize,
    pub skip: i64,
    pub limit: i64,
    pub sets: Vec<SetResponse>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
