//! SDK client configuration handle

use std::sync::{Arc, RwLock};

use crate::credentials::CredentialSet;

/// Credential configuration applied to the vendor client
///
/// Holds the last successfully applied [`CredentialSet`], or nothing if no
/// complete set has ever been applied. The handle is cheap to clone and all
/// clones share state; under concurrent credential changes the semantics
/// are last-write-wins.
///
/// # Example
///
/// ```
/// use cloudinary_sdk::credentials::CredentialSet;
/// use cloudinary_sdk::sdk::SdkClientConfig;
///
/// let sdk = SdkClientConfig::new();
/// assert!(!sdk.is_configured());
///
/// sdk.apply(&CredentialSet::new("demo", "key", "secret"));
/// assert!(sdk.is_configured());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SdkClientConfig {
    inner: Arc<RwLock<Option<CredentialSet>>>,
}

impl SdkClientConfig {
    /// Create an unconfigured handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a credential set to the vendor client
    ///
    /// Silently no-ops when any field is empty; callers filter on
    /// completeness, and no format validation happens here.
    pub fn apply(&self, credentials: &CredentialSet) {
        if !credentials.is_complete() {
            return;
        }
        let mut inner = self.inner.write().unwrap();
        *inner = Some(credentials.clone());
    }

    /// The currently applied credential set, if any
    pub fn current(&self) -> Option<CredentialSet> {
        let inner = self.inner.read().unwrap();
        inner.clone()
    }

    /// Whether a complete credential set has been applied
    pub fn is_configured(&self) -> bool {
        let inner = self.inner.read().unwrap();
        inner.is_some()
    }
}
