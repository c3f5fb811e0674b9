//! Items domain state

use crate::repository::ItemsRepositories;
use reclaim_storage::ObjectStorage;
use std::sync::Arc;

/// Application state for the Items domain
#[derive(Clone)]
pub struct ItemsState {
    pub repos: ItemsRepositories,
    pub storage: Arc<dyn ObjectStorage>,
}
