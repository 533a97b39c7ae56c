//! Cloudinary SDK integration core
//!
//! Runtime-agnostic glue between a host content platform and the Cloudinary
//! media-management SDK: credential persistence, request-scoped SDK
//! initialization, and an administrative settings flow with live credential
//! validation.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cloudinary_sdk::bootstrap::RequestBootstrapper;
//! use cloudinary_sdk::logging::ConsoleLogger;
//! use cloudinary_sdk::sdk::SdkClientConfig;
//! use cloudinary_sdk::store::FileCredentialStore;
//!
//! let store = Arc::new(FileCredentialStore::user());
//! let sdk = SdkClientConfig::new();
//! let boot = RequestBootstrapper::new(store, sdk.clone(), Arc::new(ConsoleLogger::new()));
//!
//! // At the earliest point of every inbound request:
//! if boot.on_request_start(None).await? {
//!     // downstream handlers may use the configured client
//! }
//! ```

pub mod bootstrap;
pub mod credentials;
pub mod logging;
pub mod sdk;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use credentials::{
    CredentialSet, API_KEY_KEY, API_SECRET_KEY, CLOUD_NAME_KEY, SETTINGS_NAMESPACE,
};

pub use store::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, StoreError, StoreResult,
};

pub use sdk::{
    CloudinaryApi, HttpCloudinaryApi, MockCloudinaryApi, SdkClientConfig, SdkError, SdkResult,
};

pub use bootstrap::RequestBootstrapper;

pub use settings::{
    CredentialValidator, FormError, FormField, FormPhase, SettingsController, SettingsForm,
    SubmitOutcome, ValidationError, ValidationOutcome,
};

pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};
