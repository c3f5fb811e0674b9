//! Listing filter engine
//!
//! Derives the visible subset of the item collection from four independent
//! predicates: free-text search, type, category, and status. Predicates
//! compose conjunctively and the whole thing is a pure function over the
//! fetched collection; there is no pagination.

use crate::domain::entities::{Item, ItemStatus, ItemType};

/// Filter criteria for the item listing.
///
/// `None` on any criterion means pass-through, mirroring the `all` sentinel
/// on the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub search: Option<String>,
    pub item_type: Option<ItemType>,
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
}

impl ItemFilter {
    /// True when every active criterion accepts the item.
    ///
    /// The search query is a case-insensitive substring test against title,
    /// description, location, and category; one hit is enough.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(item_type) = self.item_type {
            if item.item_type != item_type {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if item.category != *category {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }

        if let Some(ref query) = self.search {
            let query = query.to_lowercase();
            if !query.is_empty() {
                return item.title.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
                    || item.location.to_lowercase().contains(&query)
                    || item.category.to_lowercase().contains(&query);
            }
        }

        true
    }

    /// Derive the filtered view, preserving collection order
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty)
            && self.item_type.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}
