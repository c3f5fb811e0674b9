//! Reclaim application composition root
//!
//! Composes the items domain router with shared infrastructure routes.

use axum::Router;
use reclaim_items::{ItemsRepositories, ItemsState};
use reclaim_storage::{StorageConfig, StorageFactory};
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes and middleware
pub async fn create_app(pool: PgPool) -> Result<Router, anyhow::Error> {
    // Create repositories
    let items_repos = ItemsRepositories::new(pool);

    // Create object storage from environment
    let storage_config = StorageConfig::from_env()?;
    let storage = StorageFactory::create(storage_config)?;

    // Create Items domain state
    let items_state = ItemsState {
        repos: items_repos,
        storage: Arc::from(storage),
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Reclaim API v0.1.0" }))
        .merge(reclaim_items::routes().with_state(items_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
