//! Reclaim object storage
//!
//! Provides blob upload for item images with support for:
//! - Supabase Storage integration for production uploads
//! - Mock storage for testing and development
//!
//! The store assigns no meaning to uploaded paths; callers are responsible
//! for choosing collision-resistant names.

pub mod mock;
pub mod supabase;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Storage transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Object storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider (supabase, mock)
    pub provider: String,
    /// Supabase project base URL
    pub supabase_url: Option<String>,
    /// Supabase service role key (uploads bypass row-level security)
    pub service_role_key: Option<String>,
    /// Bucket that holds item images
    pub bucket: String,
}

impl StorageConfig {
    /// Create storage config from environment variables
    pub fn from_env() -> Result<Self, StorageError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let supabase_url = std::env::var("SUPABASE_URL").ok();
        let service_role_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY").ok();
        let bucket =
            std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "item-images".to_string());

        Ok(Self {
            provider,
            supabase_url,
            service_role_key,
            bucket,
        })
    }
}

/// Object storage trait for different implementations
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a blob under `path` and return its public URL
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Public URL for a blob at `path`, whether or not it exists
    fn public_url(&self, path: &str) -> String;

    /// Bucket this storage writes into
    fn bucket(&self) -> &str;
}

/// Object storage factory
pub struct StorageFactory;

impl StorageFactory {
    /// Create an object storage backend based on configuration
    pub fn create(config: StorageConfig) -> Result<Box<dyn ObjectStorage>, StorageError> {
        match config.provider.as_str() {
            "supabase" => {
                tracing::info!(bucket = %config.bucket, "Creating Supabase storage backend");
                let storage = supabase::SupabaseStorage::new(config)?;
                Ok(Box::new(storage))
            }
            "mock" => {
                tracing::info!("Creating mock storage backend");
                Ok(Box::new(mock::MockStorage::new(config.bucket)))
            }
            provider => Err(StorageError::Configuration(format!(
                "Unknown storage provider: {}. Supported providers: supabase, mock",
                provider
            ))),
        }
    }
}
