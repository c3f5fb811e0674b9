//! Supabase Storage backend
//!
//! Talks to the Supabase Storage REST API:
//! - `POST {base}/storage/v1/object/{bucket}/{path}` uploads a blob
//! - `{base}/storage/v1/object/public/{bucket}/{path}` is its public address

use crate::{ObjectStorage, StorageConfig, StorageError};

pub struct SupabaseStorage {
    http: reqwest::Client,
    base_url: String,
    service_role_key: String,
    bucket: String,
}

impl SupabaseStorage {
    /// Create a Supabase storage backend from configuration
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        let base_url = config.supabase_url.ok_or_else(|| {
            StorageError::Configuration("SUPABASE_URL is required for supabase storage".to_string())
        })?;
        let service_role_key = config.service_role_key.ok_or_else(|| {
            StorageError::Configuration(
                "SUPABASE_SERVICE_ROLE_KEY is required for supabase storage".to_string(),
            )
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key,
            bucket: config.bucket,
        })
    }
}

#[async_trait::async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.service_role_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, path, "Supabase upload rejected");
            return Err(StorageError::Upload(format!(
                "Supabase returned {} for {}: {}",
                status, path, detail
            )));
        }

        tracing::debug!(path, bucket = %self.bucket, "Uploaded blob");
        Ok(self.public_url(path))
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
