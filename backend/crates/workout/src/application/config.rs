//! Workout application configuration

use crate::domain::value_objects::DEFAULT_PAGE_LIMIT;

#[derive(Debug, Clone)]
pub struct WorkoutConfig {
    /// Largest page a list request may ask for; also the default page size
    pub max_page_size: i64,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_PAGE_LIMIT,
        }
    }
}
