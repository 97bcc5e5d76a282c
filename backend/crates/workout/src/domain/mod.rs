pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::Set;
pub use repository::SetRepository;
pub use value_objects::{Page, SetDraft, SetId};
