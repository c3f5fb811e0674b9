//! Moderation handlers
//!
//! The admin view fetches its own copy of the collection; nothing is shared
//! with the public listing, so the two can observe divergent snapshots.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use reclaim_common::{Error, Result};

use crate::api::handlers::items::ItemResponse;
use crate::api::middleware::ItemsState;
use crate::domain::entities::{ItemStats, ItemStatus};
use crate::domain::filter::ItemFilter;

/// Query parameters for the admin listing (status-only filter)
#[derive(Debug, Default, Deserialize)]
pub struct AdminListParams {
    pub status: Option<String>,
}

/// Request body for the status update
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ItemStatus,
}

/// Query parameters for delete; the explicit confirmation step
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    pub confirm: Option<bool>,
}

/// List items for moderation, newest first, optionally narrowed by status
pub async fn list_items(
    State(state): State<ItemsState>,
    Query(params): Query<AdminListParams>,
) -> Result<Json<Vec<ItemResponse>>> {
    let status = match params.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(raw) => Some(raw.parse::<ItemStatus>()?),
    };
    let filter = ItemFilter {
        status,
        ..Default::default()
    };

    let items = state.repos.items.list_all().await?;
    let responses: Vec<ItemResponse> = filter.apply(&items).into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Collection counters for the moderation dashboard
pub async fn stats(State(state): State<ItemsState>) -> Result<Json<ItemStats>> {
    let items = state.repos.items.list_all().await?;
    Ok(Json(ItemStats::collect(&items)))
}

/// Update an item's moderation status.
///
/// The update touches only the status column. Any status is reachable from
/// any other, and setting the current status again succeeds unchanged.
pub async fn update_status(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ItemResponse>> {
    let updated = state
        .repos
        .items
        .update_status(id, req.status)
        .await?
        .ok_or_else(|| Error::NotFound("Item not found".to_string()))?;

    tracing::info!(item_id = %id, status = %req.status, "Item status updated");
    Ok(Json(updated.into()))
}

/// Delete an item. Irreversible; requires `confirm=true` and is rejected
/// before any store call without it. Deleting a missing id reports 404.
pub async fn delete_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode> {
    if params.confirm != Some(true) {
        return Err(Error::Validation(
            "Deletion is irreversible and requires confirm=true".to_string(),
        ));
    }

    let deleted = state.repos.items.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Item not found".to_string()));
    }

    tracing::info!(item_id = %id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}
