//! Item domain entities for Reclaim
//!
//! A single entity backs the whole listing: the lost/found item report.
//! Status carries no state machine on purpose: moderation may move an item
//! between any two statuses at any time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reclaim_common::{Error, Result};

/// Fixed category list offered at submission time.
///
/// Only the submission flow checks against this list; the store itself
/// accepts whatever string is already on a record.
pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Clothing",
    "Accessories",
    "Documents",
    "Keys",
    "Bags",
    "Books",
    "Sports Equipment",
    "Jewelry",
    "Other",
];

/// Check a category against the submission-time list
pub fn is_valid_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

/// Whether an item was lost or found. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lost" => Ok(ItemType::Lost),
            "found" => Ok(ItemType::Found),
            other => Err(Error::Validation(format!(
                "Invalid item type '{}'. Expected one of: lost, found",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "item_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Unclaimed,
    Claimed,
    Resolved,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Unclaimed => "unclaimed",
            ItemStatus::Claimed => "claimed",
            ItemStatus::Resolved => "resolved",
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unclaimed" => Ok(ItemStatus::Unclaimed),
            "claimed" => Ok(ItemStatus::Claimed),
            "resolved" => Ok(ItemStatus::Resolved),
            other => Err(Error::Validation(format!(
                "Invalid status '{}'. Expected one of: unclaimed, claimed, resolved",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: Uuid,
    pub item_type: ItemType,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    /// When the loss/find occurred (user supplied, not the record time)
    pub date_time: DateTime<Utc>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub image_url: Option<String>,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item report with validation.
    ///
    /// Status is always `unclaimed` here, whatever the caller collected:
    /// moderation state is only ever set through the admin update.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item_type: ItemType,
        title: String,
        description: String,
        category: String,
        location: String,
        date_time: DateTime<Utc>,
        contact_name: String,
        contact_email: String,
        contact_phone: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        if description.trim().is_empty() {
            return Err(Error::Validation("Description is required".to_string()));
        }
        if location.trim().is_empty() {
            return Err(Error::Validation("Location is required".to_string()));
        }
        if contact_name.trim().is_empty() {
            return Err(Error::Validation("Contact name is required".to_string()));
        }
        if contact_email.trim().is_empty() {
            return Err(Error::Validation("Contact email is required".to_string()));
        }
        if !is_valid_category(&category) {
            return Err(Error::Validation(format!(
                "Invalid category '{}'. Expected one of: {}",
                category,
                CATEGORIES.join(", ")
            )));
        }

        let now = Utc::now();
        Ok(Item {
            id: Uuid::new_v4(),
            item_type,
            title,
            description,
            category,
            location,
            date_time,
            contact_name,
            contact_email,
            contact_phone,
            image_url,
            status: ItemStatus::default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Collection-level counters shown on the moderation dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemStats {
    pub total: usize,
    pub unclaimed: usize,
    pub claimed: usize,
    pub resolved: usize,
    pub lost: usize,
    pub found: usize,
}

impl ItemStats {
    /// Derive counters from the full collection
    pub fn collect(items: &[Item]) -> Self {
        Self {
            total: items.len(),
            unclaimed: items
                .iter()
                .filter(|i| i.status == ItemStatus::Unclaimed)
                .count(),
            claimed: items
                .iter()
                .filter(|i| i.status == ItemStatus::Claimed)
                .count(),
            resolved: items
                .iter()
                .filter(|i| i.status == ItemStatus::Resolved)
                .count(),
            lost: items.iter().filter(|i| i.item_type == ItemType::Lost).count(),
            found: items
                .iter()
                .filter(|i| i.item_type == ItemType::Found)
                .count(),
        }
    }
}
