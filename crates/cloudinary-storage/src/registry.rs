//! Storage backend registry
//!
//! Collaborating modules register named backends at startup; hosts pick one
//! by name or enumerate the aggregated descriptor mapping. Registration is
//! last-write-wins on duplicate names, and aggregation performs no
//! validation of the factory.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::memory::MemoryStorageBackend;
use super::traits::StorageBackend;

/// Factory function type for creating storage backends
pub type BackendFactory = Box<dyn Fn() -> Arc<dyn StorageBackend> + Send + Sync>;

/// Definition of a registered storage backend
pub struct BackendDefinition {
    /// Unique name for this backend
    pub name: String,
    /// Display title
    pub title: String,
    /// Factory function to create instances
    pub factory: BackendFactory,
}

impl std::fmt::Debug for BackendDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendDefinition")
            .field("name", &self.name)
            .field("title", &self.title)
            .finish()
    }
}

/// Descriptor view of a registered backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageInfo {
    /// Display title
    pub title: String,
}

/// Global registry of storage backends
static REGISTRY: Lazy<RwLock<HashMap<String, BackendDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Register built-in backends
    map.insert(
        "memory".to_string(),
        BackendDefinition {
            name: "memory".to_string(),
            title: "Memory".to_string(),
            factory: Box::new(|| Arc::new(MemoryStorageBackend::new())),
        },
    );

    RwLock::new(map)
});

/// Register a storage backend
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cloudinary_storage::{register_storage_backend, LocalStorageBackend};
///
/// register_storage_backend(
///     "local",
///     "Local filesystem",
///     Box::new(|| Arc::new(LocalStorageBackend::new("assets"))),
/// );
/// ```
pub fn register_storage_backend(name: &str, title: &str, factory: BackendFactory) {
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(
        name.to_string(),
        BackendDefinition {
            name: name.to_string(),
            title: title.to_string(),
            factory,
        },
    );
}

/// Create a storage backend by name
///
/// Returns `None` if the name is not registered.
pub fn create_storage_backend(name: &str) -> Option<Arc<dyn StorageBackend>> {
    let registry = REGISTRY.read().unwrap();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered backend names with their titles
pub fn list_storage_backends() -> Vec<(String, String)> {
    let registry = REGISTRY.read().unwrap();
    registry
        .values()
        .map(|def| (def.name.clone(), def.title.clone()))
        .collect()
}

/// Check whether a backend is registered
pub fn has_storage_backend(name: &str) -> bool {
    let registry = REGISTRY.read().unwrap();
    registry.contains_key(name)
}

/// Aggregated descriptor mapping of every registered backend
///
/// Pure with respect to the registered set: invoking it twice with the
/// same registrations yields the same mapping.
pub fn storage_backend_info() -> HashMap<String, StorageInfo> {
    let registry = REGISTRY.read().unwrap();
    registry
        .iter()
        .map(|(name, def)| {
            (
                name.clone(),
                StorageInfo {
                    title: def.title.clone(),
                },
            )
        })
        .collect()
}

/// Unregister a storage backend (mainly for testing)
pub fn unregister_storage_backend(name: &str) -> bool {
    let mut registry = REGISTRY.write().unwrap();
    registry.remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_backend_registered() {
        assert!(has_storage_backend("memory"));
    }

    #[test]
    fn test_create_memory_backend() {
        let backend = create_storage_backend("memory").unwrap();
        assert_eq!(backend.name(), "memory");
    }

    #[test]
    fn test_create_unknown_backend() {
        assert!(create_storage_backend("nonexistent_xyz").is_none());
    }

    #[test]
    fn test_two_collaborators_register_distinct_backends() {
        // Two independent modules each contribute a backend; the aggregated
        // mapping must carry both entries keyed by their names.
        register_storage_backend(
            "test_remote",
            "Remote",
            Box::new(|| Arc::new(MemoryStorageBackend::new())),
        );
        register_storage_backend(
            "test_archive",
            "Archive",
            Box::new(|| Arc::new(MemoryStorageBackend::new())),
        );

        let info = storage_backend_info();
        assert_eq!(info.get("test_remote").unwrap().title, "Remote");
        assert_eq!(info.get("test_archive").unwrap().title, "Archive");

        unregister_storage_backend("test_remote");
        unregister_storage_backend("test_archive");
    }

    #[test]
    fn test_info_is_stable_across_calls() {
        register_storage_backend(
            "test_stable",
            "Stable",
            Box::new(|| Arc::new(MemoryStorageBackend::new())),
        );

        let first = storage_backend_info();
        let second = storage_backend_info();
        assert_eq!(first.get("test_stable"), second.get("test_stable"));

        unregister_storage_backend("test_stable");
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        register_storage_backend(
            "test_dup",
            "First",
            Box::new(|| Arc::new(MemoryStorageBackend::new())),
        );
        register_storage_backend(
            "test_dup",
            "Second",
            Box::new(|| Arc::new(MemoryStorageBackend::new())),
        );

        let info = storage_backend_info();
        assert_eq!(info.get("test_dup").unwrap().title, "Second");

        unregister_storage_backend("test_dup");
    }

    #[test]
    fn test_list_backends() {
        let names: Vec<_> = list_storage_backends()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert!(names.contains(&"memory".to_string()));
    }
}
