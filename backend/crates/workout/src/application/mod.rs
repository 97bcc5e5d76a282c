//! Application Layer
//!
//! One use case per file, each generic over the `SetRepository` it runs against.

pub mod config;
pub mod create_set;
pub mod delete_set;
pub mod get_set;
pub mod list_sets;
pub mod update_set;

pub use config::WorkoutConfig;
pub use create_set::CreateSetUseCase;
pub use delete_set::DeleteSetUseCase;
pub use get_set::GetSetUseCase;
pub use list_sets::{ListSetsInput, ListSetsOutput, ListSetsUseCase};
pub use update_set::UpdateSetUseCase;
