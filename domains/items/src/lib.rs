//! Items domain: lost/found listings, submission, moderation

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{is_valid_category, Item, ItemStats, ItemStatus, ItemType, CATEGORIES};
pub use domain::filter::ItemFilter;

// Re-export repository types
pub use repository::{ItemRepository, ItemsRepositories};

// Re-export API types
pub use api::routes;
pub use api::ItemsState;
