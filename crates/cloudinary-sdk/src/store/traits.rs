//! Credential store trait

use async_trait::async_trait;

use crate::credentials::{CredentialSet, API_KEY_KEY, API_SECRET_KEY, CLOUD_NAME_KEY};

/// Errors that can occur during credential store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persisted credential storage abstraction
///
/// Implementations:
/// - `MemoryCredentialStore`: in-memory for testing
/// - `FileCredentialStore`: YAML file in the user or workspace config dir
/// - host adapter: reads/writes the host platform's own config service
///
/// Raw `get`/`set` operate on individual keys within the
/// `cloudinary_sdk.settings` namespace; `load`/`save` work on the
/// well-known credential keys as a unit.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a single value by storage key
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a single value by storage key
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Load the persisted credential set
    ///
    /// Keys that were never written read as empty strings, so an
    /// unconfigured store yields an incomplete [`CredentialSet`].
    async fn load(&self) -> StoreResult<CredentialSet> {
        Ok(CredentialSet {
            cloud_name: self.get(CLOUD_NAME_KEY).await?.unwrap_or_default(),
            api_key: self.get(API_KEY_KEY).await?.unwrap_or_default(),
            api_secret: self.get(API_SECRET_KEY).await?.unwrap_or_default(),
        })
    }

    /// Persist the credential set, overwriting all three keys
    async fn save(&self, credentials: &CredentialSet) -> StoreResult<()> {
        self.set(CLOUD_NAME_KEY, &credentials.cloud_name).await?;
        self.set(API_KEY_KEY, &credentials.api_key).await?;
        self.set(API_SECRET_KEY, &credentials.api_secret).await?;
        Ok(())
    }
}
