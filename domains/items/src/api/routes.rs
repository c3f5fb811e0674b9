//! Route definitions for the Items domain API

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{admin, contact, items};
use super::middleware::ItemsState;

/// Create all Items domain API routes.
///
/// The admin surface is deliberately unguarded; authentication is out of
/// scope for this service.
pub fn routes() -> Router<ItemsState> {
    Router::new()
        .route("/v1/items", get(items::list_items).post(items::submit_item))
        .route("/v1/items/{id}", get(items::get_item))
        .route("/v1/items/{id}/contact", post(contact::contact_reporter))
        .route("/v1/admin/items", get(admin::list_items))
        .route("/v1/admin/items/{id}", delete(admin::delete_item))
        .route("/v1/admin/items/{id}/status", patch(admin::update_status))
        .route("/v1/admin/stats", get(admin::stats))
}
