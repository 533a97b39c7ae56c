//! Local filesystem storage backend

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use cloudinary_sdk::logging::{NoOpLogger, SharedLogger};

use super::traits::{StorageBackend, StorageError, StorageResult};

/// Storage backend that keeps assets as files under a root directory
///
/// Keys map to relative paths below the root; keys that escape the root
/// (`..` components or absolute paths) are rejected.
pub struct LocalStorageBackend {
    root: PathBuf,
    logger: SharedLogger,
}

impl LocalStorageBackend {
    /// Create a backend rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    /// Attach a logger
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Root directory of the backend
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let relative = Path::new(key);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(StorageError::Other(format!("Invalid asset key: {}", key)));
        }
        Ok(self.root.join(relative))
    }
}

impl std::fmt::Debug for LocalStorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStorageBackend")
            .field("root", &self.root)
            .finish()
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    fn name(&self) -> &str {
        "local"
    }

    async fn store(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        self.logger
            .debug(&format!("Stored asset {} ({} bytes)", key, data.len()));
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }
        Ok(std::fs::read(path)?)
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }
        std::fs::remove_file(path)?;
        self.logger.debug(&format!("Deleted asset {}", key));
        Ok(())
    }

    async fn exists(&self, key: &str) -> bool {
        self.path_for(key).map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_retrieve_delete() {
        let dir = tempdir().unwrap();
        let backend = LocalStorageBackend::new(dir.path());

        backend.store("img/a.png", b"bytes").await.unwrap();
        assert!(dir.path().join("img/a.png").exists());
        assert_eq!(backend.retrieve("img/a.png").await.unwrap(), b"bytes");

        backend.delete("img/a.png").await.unwrap();
        assert!(!backend.exists("img/a.png").await);
    }

    #[tokio::test]
    async fn test_missing_key() {
        let dir = tempdir().unwrap();
        let backend = LocalStorageBackend::new(dir.path());
        assert!(matches!(
            backend.retrieve("missing").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let dir = tempdir().unwrap();
        let backend = LocalStorageBackend::new(dir.path());
        assert!(backend.store("../escape", b"x").await.is_err());
        assert!(backend.store("/abs/path", b"x").await.is_err());
        assert!(!backend.exists("../escape").await);
    }
}
