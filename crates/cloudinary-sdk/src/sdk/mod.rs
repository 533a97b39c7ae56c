//! Cloudinary vendor SDK boundary
//!
//! The vendor client is opaque to this crate; what we own is the credential
//! configuration applied to it and a lightweight authenticated ping used to
//! confirm credentials are valid.
//!
//! `SdkClientConfig` is an explicit, injectable handle rather than ambient
//! process-global state, so hosts decide the sharing scope themselves.

mod client;
mod error;
mod http;
mod mock;

pub use client::SdkClientConfig;
pub use error::{SdkError, SdkResult};
pub use http::HttpCloudinaryApi;
pub use mock::MockCloudinaryApi;

use async_trait::async_trait;

/// Vendor API boundary
///
/// Implementations:
/// - `HttpCloudinaryApi`: live calls against the Cloudinary admin API
/// - `MockCloudinaryApi`: deterministic test double
#[async_trait]
pub trait CloudinaryApi: Send + Sync {
    /// Lightweight authenticated round-trip to the vendor API
    ///
    /// Succeeds only when the currently applied credentials are accepted
    /// by the vendor.
    async fn ping(&self) -> SdkResult<()>;
}
