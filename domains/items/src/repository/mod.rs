//! Repository implementations for the Items domain

pub mod items;

use sqlx::PgPool;

pub use items::ItemRepository;

/// Combined repository access for the Items domain
#[derive(Clone)]
pub struct ItemsRepositories {
    pool: PgPool,
    pub items: ItemRepository,
}

impl ItemsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            items: ItemRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying database pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
