//! Request-scoped bootstrap
//!
//! Runs at the earliest point of inbound request handling, before any code
//! that touches the vendor client. Hook ordering is the host dispatcher's
//! concern; this module only supplies the handler.

use std::sync::Arc;

use crate::credentials::CredentialSet;
use crate::logging::SharedLogger;
use crate::sdk::SdkClientConfig;
use crate::store::{CredentialStore, StoreResult};

/// Applies persisted credentials to the SDK client at request start
pub struct RequestBootstrapper {
    store: Arc<dyn CredentialStore>,
    sdk: SdkClientConfig,
    logger: SharedLogger,
}

impl RequestBootstrapper {
    /// Create a bootstrapper over a credential store and SDK handle
    pub fn new(store: Arc<dyn CredentialStore>, sdk: SdkClientConfig, logger: SharedLogger) -> Self {
        Self { store, sdk, logger }
    }

    /// Configure the SDK client for the current request
    ///
    /// Uses `candidate` when supplied and complete; otherwise loads the
    /// persisted credential set. Returns `true` when a complete set was
    /// applied, `false` when the system is still unconfigured. Absence of
    /// configuration is a normal silent state before first setup, not an
    /// error.
    pub async fn on_request_start(&self, candidate: Option<CredentialSet>) -> StoreResult<bool> {
        let credentials = match candidate.filter(|c| c.is_complete()) {
            Some(credentials) => credentials,
            None => self.store.load().await?,
        };

        if !credentials.is_complete() {
            self.logger
                .debug("Cloudinary credentials not configured; skipping SDK init");
            return Ok(false);
        }

        self.sdk.apply(&credentials);
        Ok(true)
    }
}

impl std::fmt::Debug for RequestBootstrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBootstrapper")
            .field("configured", &self.sdk.is_configured())
            .finish()
    }
}
