//! Credential store abstractions
//!
//! Persisted key-value configuration under the `cloudinary_sdk.settings`
//! namespace. Supports multiple backends:
//! - `MemoryCredentialStore`: in-memory for testing
//! - `FileCredentialStore`: YAML file-based (user/workspace level)

mod traits;
mod memory;
mod file;

pub use traits::{CredentialStore, StoreError, StoreResult};
pub use memory::MemoryCredentialStore;
pub use file::{FileCredentialStore, StoreLevel};
