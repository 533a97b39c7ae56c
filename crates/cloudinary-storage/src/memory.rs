//! In-memory storage backend

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::{StorageBackend, StorageError, StorageResult};

/// In-memory storage backend for testing and ephemeral use
///
/// Assets are lost when the backend is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    assets: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorageBackend {
    /// Create a new empty backend
    pub fn new() -> Self {
        Self {
            assets: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored assets
    pub fn len(&self) -> usize {
        let assets = self.assets.read().unwrap();
        assets.len()
    }

    /// Whether the backend holds no assets
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StorageBackend for MemoryStorageBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn store(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        let mut assets = self.assets.write().unwrap();
        assets.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> StorageResult<Vec<u8>> {
        let assets = self.assets.read().unwrap();
        assets
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut assets = self.assets.write().unwrap();
        assets
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }
}
