//! Cloudinary account credential types

use serde::{Deserialize, Serialize};

/// Configuration namespace for persisted credentials
pub const SETTINGS_NAMESPACE: &str = "cloudinary_sdk.settings";

/// Storage key for the cloud name
pub const CLOUD_NAME_KEY: &str = "cloudinary_sdk_cloud_name";
/// Storage key for the API key
pub const API_KEY_KEY: &str = "cloudinary_sdk_api_key";
/// Storage key for the API secret
pub const API_SECRET_KEY: &str = "cloudinary_sdk_api_secret";

/// The three-field tuple identifying a Cloudinary account
///
/// All three fields must be non-empty before any SDK operation is
/// attempted; use [`CredentialSet::is_complete`] to check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    /// Cloud name of the Cloudinary account
    pub cloud_name: String,
    /// API key of the Cloudinary account
    pub api_key: String,
    /// API secret of the Cloudinary account
    pub api_secret: String,
}

impl CredentialSet {
    /// Create a credential set from the three fields
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Set the cloud name
    pub fn with_cloud_name(mut self, cloud_name: impl Into<String>) -> Self {
        self.cloud_name = cloud_name.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the API secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = api_secret.into();
        self
    }

    /// Whether all three fields are non-empty
    pub fn is_complete(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    /// Return a copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            cloud_name: self.cloud_name.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
            api_secret: self.api_secret.trim().to_string(),
        }
    }
}
