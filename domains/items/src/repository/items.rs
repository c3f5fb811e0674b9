//! Item repository

use crate::domain::entities::{Item, ItemStatus};
use reclaim_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

type Result<T> = std::result::Result<T, RepositoryError>;

/// All columns in the items table, used for SELECT and RETURNING clauses.
const ITEM_COLUMNS: &str = "\
    id, item_type, title, description, category, location, date_time, \
    contact_name, contact_email, contact_phone, image_url, status, \
    created_at, updated_at";

#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the whole collection, newest-created first.
    ///
    /// Both the listing and the admin view call this independently; there is
    /// no shared cache between them.
    pub async fn list_all(&self) -> Result<Vec<Item>> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at DESC");
        let items = sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    /// Find item by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Item>> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    /// Create a new item
    pub async fn create(&self, item: &Item) -> Result<Item> {
        let query = format!(
            "INSERT INTO items ({ITEM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {ITEM_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Item>(&query)
            .bind(item.id)
            .bind(item.item_type)
            .bind(&item.title)
            .bind(&item.description)
            .bind(&item.category)
            .bind(&item.location)
            .bind(item.date_time)
            .bind(&item.contact_name)
            .bind(&item.contact_email)
            .bind(&item.contact_phone)
            .bind(&item.image_url)
            .bind(item.status)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Update item status. The update is restricted to the status field;
    /// repeating the same status is a successful no-op.
    pub async fn update_status(&self, id: Uuid, status: ItemStatus) -> Result<Option<Item>> {
        let query = format!(
            "UPDATE items SET status = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {ITEM_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Delete an item by ID. Returns false when the id did not exist.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
