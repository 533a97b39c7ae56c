//! Pluggable storage backends for the Cloudinary integration
//!
//! Extension point allowing collaborating modules to provide alternative
//! places for asset data to live. Each backend implements the
//! [`StorageBackend`] capability contract and registers itself under a
//! unique name; hosts select a backend by name or enumerate the aggregated
//! descriptor mapping.
//!
//! ```rust
//! use std::sync::Arc;
//! use cloudinary_storage::{
//!     register_storage_backend, storage_backend_info, MemoryStorageBackend,
//! };
//!
//! register_storage_backend(
//!     "scratch",
//!     "Scratch space",
//!     Box::new(|| Arc::new(MemoryStorageBackend::new())),
//! );
//!
//! let info = storage_backend_info();
//! assert_eq!(info.get("scratch").unwrap().title, "Scratch space");
//! ```

mod local;
mod memory;
mod registry;
mod traits;

pub use traits::{StorageBackend, StorageError, StorageResult};
pub use memory::MemoryStorageBackend;
pub use local::LocalStorageBackend;
pub use registry::{
    create_storage_backend, has_storage_backend, list_storage_backends,
    register_storage_backend, storage_backend_info, unregister_storage_backend,
    BackendDefinition, BackendFactory, StorageInfo,
};
