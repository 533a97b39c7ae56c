//! In-memory credential store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::{CredentialStore, StoreResult};
use crate::credentials::CredentialSet;

/// In-memory credential store for testing and ephemeral use
///
/// Values are lost when the store is dropped.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple
/// threads.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create a memory store pre-populated with a credential set
    pub fn with_credentials(credentials: &CredentialSet) -> Self {
        let store = Self::new();
        store.set_sync(crate::credentials::CLOUD_NAME_KEY, &credentials.cloud_name);
        store.set_sync(crate::credentials::API_KEY_KEY, &credentials.api_key);
        store.set_sync(crate::credentials::API_SECRET_KEY, &credentials.api_secret);
        store
    }

    /// Write a value synchronously (useful for initialization)
    pub fn set_sync(&self, key: &str, value: &str) {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value.to_string());
    }

    /// Read a value synchronously
    pub fn get_sync(&self, key: &str) -> Option<String> {
        let values = self.values.read().unwrap();
        values.get(key).cloned()
    }

    /// Remove all values from the store
    pub fn clear(&self) {
        let mut values = self.values.write().unwrap();
        values.clear();
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap();
        values.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.get_sync(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.set_sync(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set() {
        let store = MemoryCredentialStore::new();
        assert!(store.get("cloudinary_sdk_cloud_name").await.unwrap().is_none());

        store.set("cloudinary_sdk_cloud_name", "demo").await.unwrap();
        assert_eq!(
            store.get("cloudinary_sdk_cloud_name").await.unwrap(),
            Some("demo".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_unconfigured() {
        let store = MemoryCredentialStore::new();
        let creds = store.load().await.unwrap();
        assert!(!creds.is_complete());
        assert_eq!(creds, CredentialSet::default());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let store = MemoryCredentialStore::new();
        let creds = CredentialSet::new("demo", "key", "secret");
        store.save(&creds).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, creds);
    }

    #[tokio::test]
    async fn test_with_credentials() {
        let creds = CredentialSet::new("demo", "key", "secret");
        let store = MemoryCredentialStore::with_credentials(&creds);
        assert_eq!(store.load().await.unwrap(), creds);
        assert_eq!(store.len(), 3);
    }
}
