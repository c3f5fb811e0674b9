//! Mock storage behavior used by the submission flow tests

use reclaim_storage::mock::MockStorage;
use reclaim_storage::{ObjectStorage, StorageConfig, StorageFactory};

#[tokio::test]
async fn upload_returns_public_url_and_captures_bytes() {
    let storage = MockStorage::new("item-images".to_string());

    let url = storage
        .upload("abc123.jpg", vec![0xFF, 0xD8], "image/jpeg")
        .await
        .unwrap();

    assert_eq!(url, "mock://item-images/abc123.jpg");
    assert_eq!(url, storage.public_url("abc123.jpg"));

    let captured = storage.find("abc123.jpg").unwrap();
    assert_eq!(captured.bytes, vec![0xFF, 0xD8]);
    assert_eq!(captured.content_type, "image/jpeg");
}

#[tokio::test]
async fn name_collision_fails_the_upload() {
    let storage = MockStorage::new("item-images".to_string());
    storage.upload("same.png", vec![1], "image/png").await.unwrap();

    let err = storage.upload("same.png", vec![2], "image/png").await;
    assert!(err.is_err());
    // First blob is untouched
    assert_eq!(storage.find("same.png").unwrap().bytes, vec![1]);
}

#[tokio::test]
async fn forced_failure_leaves_no_blob_behind() {
    let storage = MockStorage::new("item-images".to_string());
    storage.set_fail_uploads(true);

    assert!(storage.upload("x.jpg", vec![1], "image/jpeg").await.is_err());
    assert!(storage.uploads().is_empty());
}

#[test]
fn factory_defaults_to_configured_bucket() {
    let storage = StorageFactory::create(StorageConfig {
        provider: "mock".to_string(),
        supabase_url: None,
        service_role_key: None,
        bucket: "item-images".to_string(),
    })
    .unwrap();

    assert_eq!(storage.bucket(), "item-images");
}
