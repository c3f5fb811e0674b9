//! Repository round-trips against a live database.
//!
//! Requires a migrated Postgres reachable through DATABASE_URL; run locally
//! with `cargo test -- --ignored`.

use chrono::Utc;
use reclaim_common::RepositoryError;
use reclaim_items::{Item, ItemStatus, ItemType, ItemsRepositories};
use uuid::Uuid;

async fn repos() -> ItemsRepositories {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::PgPool::connect(&url).await.expect("connect");
    ItemsRepositories::new(pool)
}

fn report(title: &str) -> Item {
    Item::new(
        ItemType::Lost,
        title.to_string(),
        "A blue backpack".to_string(),
        "Bags".to_string(),
        "Library".to_string(),
        Utc::now(),
        "Alice".to_string(),
        "a@x.com".to_string(),
        None,
        None,
    )
    .unwrap()
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL with migrated schema - run locally only
async fn insert_is_listed_first_with_unclaimed_status() {
    let repos = repos().await;

    let item = report(&format!("Blue Backpack {}", Uuid::new_v4()));
    let created = repos.items.create(&item).await.unwrap();
    assert_eq!(created.status, ItemStatus::Unclaimed);

    let all = repos.items.list_all().await.unwrap();
    assert_eq!(all.first().map(|i| i.id), Some(created.id));

    repos.items.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL with migrated schema - run locally only
async fn status_update_is_idempotent() {
    let repos = repos().await;
    let created = repos.items.create(&report("Watch")).await.unwrap();

    let first = repos
        .items
        .update_status(created.id, ItemStatus::Claimed)
        .await
        .unwrap()
        .unwrap();
    let second = repos
        .items
        .update_status(created.id, ItemStatus::Claimed)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first.status, ItemStatus::Claimed);
    assert_eq!(second.status, ItemStatus::Claimed);

    repos.items.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL with migrated schema - run locally only
async fn delete_of_missing_id_reports_failure() {
    let repos = repos().await;
    let deleted = repos.items.delete(Uuid::new_v4()).await.unwrap();
    assert!(!deleted, "deleting a missing id must not report success");
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL with migrated schema - run locally only
async fn duplicate_id_insert_is_classified_as_already_exists() {
    let repos = repos().await;
    let item = report("Umbrella");
    let created = repos.items.create(&item).await.unwrap();

    let err = repos.items.create(&item).await.unwrap_err();
    assert!(matches!(err, RepositoryError::AlreadyExists));

    repos.items.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL with migrated schema - run locally only
async fn update_status_of_missing_id_returns_none() {
    let repos = repos().await;
    let updated = repos
        .items
        .update_status(Uuid::new_v4(), ItemStatus::Resolved)
        .await
        .unwrap();
    assert!(updated.is_none());
}
