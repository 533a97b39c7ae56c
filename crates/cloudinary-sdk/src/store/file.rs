//! File-based credential store (YAML)
//!
//! Persists the `cloudinary_sdk.settings` namespace as a flat YAML mapping.
//! Supports user-level (~/.config/cloudinary/cloudinary_sdk.settings.yaml)
//! and workspace-level (.config/cloudinary/cloudinary_sdk.settings.yaml)
//! locations.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::{CredentialStore, StoreError, StoreResult};

const SETTINGS_FILE: &str = "cloudinary_sdk.settings.yaml";

/// Store level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreLevel {
    /// User-level settings (~/.config/cloudinary/)
    User,
    /// Workspace-level settings (.config/cloudinary/ in the workspace root)
    Workspace,
}

impl StoreLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreLevel::User => "user",
            StoreLevel::Workspace => "workspace",
        }
    }
}

/// File-based credential store
///
/// Reads and writes the settings namespace from a YAML file. A missing
/// file reads as an empty namespace.
///
/// # Example
///
/// ```no_run
/// use cloudinary_sdk::store::FileCredentialStore;
///
/// // User-level settings
/// let user_store = FileCredentialStore::user();
///
/// // Workspace-level settings
/// let workspace_store = FileCredentialStore::workspace("/path/to/workspace");
/// ```
pub struct FileCredentialStore {
    path: PathBuf,
    level: StoreLevel,
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl FileCredentialStore {
    /// Create a store backed by a specific file path
    pub fn new(path: impl Into<PathBuf>, level: StoreLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// Create a user-level store (~/.config/cloudinary/cloudinary_sdk.settings.yaml)
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        let path = config_dir.join("cloudinary").join(SETTINGS_FILE);
        Self::new(path, StoreLevel::User)
    }

    /// Create a workspace-level store (.config/cloudinary/cloudinary_sdk.settings.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root
            .as_ref()
            .join(".config")
            .join("cloudinary")
            .join(SETTINGS_FILE);
        Self::new(path, StoreLevel::Workspace)
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store level
    pub fn level(&self) -> StoreLevel {
        self.level
    }

    /// Whether the settings file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read settings from disk, bypassing the cache
    fn read_file(&self) -> StoreResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let values: HashMap<String, String> = serde_yaml::from_str(&content)
            .map_err(|e| StoreError::Other(format!("Failed to parse YAML: {}", e)))?;

        Ok(values)
    }

    /// Write settings to disk and refresh the cache
    fn write_file(&self, values: &HashMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(values)
            .map_err(|e| StoreError::Other(format!("Failed to serialize YAML: {}", e)))?;

        fs::write(&self.path, content)?;

        let mut cache = self.cache.write().unwrap();
        *cache = Some(values.clone());

        Ok(())
    }

    /// Get cached settings, loading from disk on first access
    fn values(&self) -> StoreResult<HashMap<String, String>> {
        let cache = self.cache.read().unwrap();
        if let Some(values) = cache.as_ref() {
            return Ok(values.clone());
        }
        drop(cache);

        let values = self.read_file()?;
        let mut cache = self.cache.write().unwrap();
        *cache = Some(values.clone());
        Ok(values)
    }

    /// Reload settings from disk (invalidate the cache)
    pub fn reload(&self) -> StoreResult<()> {
        let values = self.read_file()?;
        let mut cache = self.cache.write().unwrap();
        *cache = Some(values);
        Ok(())
    }
}

impl std::fmt::Debug for FileCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredentialStore")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self.values()?;
        values.insert(key.to_string(), value.to_string());
        self.write_file(&values)
    }
}
