//! Mock vendor API for testing
//!
//! Provides deterministic ping behavior without network dependencies and
//! records how many calls were made, so tests can assert that a code path
//! made no network call at all.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::error::{SdkError, SdkResult};
use super::CloudinaryApi;

/// Mock ping behavior
#[derive(Debug, Clone)]
pub enum MockPing {
    /// Every ping succeeds
    Ok,
    /// Every ping fails with the given vendor error message
    Fail(String),
}

/// Mock Cloudinary API for testing
#[derive(Debug)]
pub struct MockCloudinaryApi {
    mode: MockPing,
    calls: AtomicUsize,
}

impl MockCloudinaryApi {
    /// Create a mock whose pings always succeed
    pub fn ok() -> Self {
        Self {
            mode: MockPing::Ok,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose pings always fail with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            mode: MockPing::Fail(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of pings performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CloudinaryApi for MockCloudinaryApi {
    async fn ping(&self) -> SdkResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            MockPing::Ok => Ok(()),
            MockPing::Fail(message) => Err(SdkError::Other(message.clone())),
        }
    }
}
