//! Credential validation against the live vendor API

use std::sync::Arc;

use thiserror::Error;

use crate::credentials::CredentialSet;
use crate::logging::SharedLogger;
use crate::sdk::{CloudinaryApi, SdkClientConfig};
use crate::store::{CredentialStore, StoreError};

/// How a validation attempt concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// A field was empty after trimming; no change was attempted
    Skipped,
    /// Candidate matches the persisted credentials; no ping was made
    Unchanged,
    /// Candidate differs and the vendor accepted it
    Verified,
}

/// Errors that can occur during credential validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The live ping was rejected; carries the vendor's error message as a
    /// form-level (non-field) failure
    #[error("{message}")]
    Ping { message: String },

    /// Reading the persisted credentials failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates candidate credentials before they are persisted
///
/// A changed candidate is applied to the SDK client and confirmed with a
/// live authenticated ping; an unchanged candidate short-circuits without
/// any network call.
pub struct CredentialValidator {
    store: Arc<dyn CredentialStore>,
    sdk: SdkClientConfig,
    api: Arc<dyn CloudinaryApi>,
    logger: SharedLogger,
}

impl CredentialValidator {
    /// Create a validator over a store, SDK handle, and vendor API
    pub fn new(
        store: Arc<dyn CredentialStore>,
        sdk: SdkClientConfig,
        api: Arc<dyn CloudinaryApi>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            store,
            sdk,
            api,
            logger,
        }
    }

    /// Validate a candidate credential set
    ///
    /// The candidate is trimmed first. An incomplete candidate is treated
    /// as "not attempting a change" and skipped; the form layer enforces
    /// required fields independently.
    pub async fn validate(
        &self,
        candidate: &CredentialSet,
    ) -> Result<ValidationOutcome, ValidationError> {
        let candidate = candidate.trimmed();
        if !candidate.is_complete() {
            return Ok(ValidationOutcome::Skipped);
        }

        // Compared field by field, never as one concatenated string.
        let persisted = self.store.load().await?;
        if candidate == persisted.trimmed() {
            return Ok(ValidationOutcome::Unchanged);
        }

        self.sdk.apply(&candidate);
        if let Err(e) = self.api.ping().await {
            let message = e.to_string();
            self.logger
                .warn(&format!("Cloudinary ping failed: {}", message));
            return Err(ValidationError::Ping { message });
        }

        Ok(ValidationOutcome::Verified)
    }
}

impl std::fmt::Debug for CredentialValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialValidator")
            .field("configured", &self.sdk.is_configured())
            .finish()
    }
}
