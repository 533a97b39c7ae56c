//! Storage backend capability contract

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during storage backend operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Backend is read-only")]
    ReadOnly,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A pluggable media storage backend
///
/// Backends decide where and how asset data lives (memory, local disk,
/// remote service). Implementations register themselves through
/// [`crate::register_storage_backend`] so hosts can select one by name.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Unique backend name
    fn name(&self) -> &str;

    /// Store asset data under a key, overwriting any previous value
    async fn store(&self, key: &str, data: &[u8]) -> StorageResult<()>;

    /// Retrieve asset data by key
    async fn retrieve(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete an asset by key
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Whether an asset exists under the key
    async fn exists(&self, key: &str) -> bool {
        self.retrieve(key).await.is_ok()
    }
}
