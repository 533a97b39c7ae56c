//! Live Cloudinary admin API client

use std::time::Duration;

use async_trait::async_trait;

use super::client::SdkClientConfig;
use super::error::{SdkError, SdkResult};
use super::CloudinaryApi;

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Default bound on the ping round-trip so form validation cannot block
/// indefinitely on a slow network.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Cloudinary admin API client backed by `reqwest`
///
/// Credentials come from the injected [`SdkClientConfig`]; the client
/// always uses whatever set is currently applied there.
pub struct HttpCloudinaryApi {
    sdk: SdkClientConfig,
    http: reqwest::Client,
    api_base: String,
}

impl HttpCloudinaryApi {
    /// Create a client with the default API base and timeout
    pub fn new(sdk: SdkClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            sdk,
            http,
            api_base: API_BASE.to_string(),
        }
    }

    /// Override the API base URL (test servers, proxies)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// The configured API base URL
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl std::fmt::Debug for HttpCloudinaryApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCloudinaryApi")
            .field("api_base", &self.api_base)
            .field("configured", &self.sdk.is_configured())
            .finish()
    }
}

#[async_trait]
impl CloudinaryApi for HttpCloudinaryApi {
    async fn ping(&self) -> SdkResult<()> {
        let credentials = self.sdk.current().ok_or(SdkError::NotConfigured)?;

        let url = format!("{}/{}/ping", self.api_base, credentials.cloud_name);
        let response = self
            .http
            .get(&url)
            .basic_auth(&credentials.api_key, Some(&credentials.api_secret))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(SdkError::api_error(status.as_u16(), message))
    }
}
