//! Mock storage implementation
//!
//! Captures uploads in memory for testing without external dependencies.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::{ObjectStorage, StorageError};

/// Blob captured by the mock backend
#[derive(Debug, Clone)]
pub struct CapturedUpload {
    pub path: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Mock object storage for testing
#[derive(Debug, Clone)]
pub struct MockStorage {
    bucket: String,
    uploads: Arc<Mutex<Vec<CapturedUpload>>>,
    fail_uploads: Arc<Mutex<bool>>,
}

impl MockStorage {
    pub fn new(bucket: String) -> Self {
        Self {
            bucket,
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail_uploads: Arc::new(Mutex::new(false)),
        }
    }

    /// All uploads captured so far
    pub fn uploads(&self) -> Vec<CapturedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    /// Find a captured upload by path
    pub fn find(&self, path: &str) -> Option<CapturedUpload> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.path == path)
            .cloned()
    }

    /// Make subsequent uploads fail, for failure-path tests
    pub fn set_fail_uploads(&self, fail: bool) {
        *self.fail_uploads.lock().unwrap() = fail;
    }

    /// Drop all captured uploads
    pub fn clear(&self) {
        self.uploads.lock().unwrap().clear();
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MockStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        if *self.fail_uploads.lock().unwrap() {
            return Err(StorageError::Upload(format!(
                "mock storage configured to fail upload of {}",
                path
            )));
        }

        // Mirror the real store: same path twice is a name collision
        let mut uploads = self.uploads.lock().unwrap();
        if uploads.iter().any(|u| u.path == path) {
            return Err(StorageError::Upload(format!(
                "object already exists at {}",
                path
            )));
        }

        uploads.push(CapturedUpload {
            path: path.to_string(),
            bytes,
            content_type: content_type.to_string(),
            uploaded_at: Utc::now(),
        });

        Ok(self.public_url(path))
    }

    fn public_url(&self, path: &str) -> String {
        format!("mock://{}/{}", self.bucket, path)
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
