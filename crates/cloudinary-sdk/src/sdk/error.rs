//! Vendor boundary error types

use thiserror::Error;

/// Errors that can occur at the vendor SDK boundary
#[derive(Error, Debug)]
pub enum SdkError {
    /// No complete credential set has been applied
    #[error("Cloudinary client is not configured")]
    NotConfigured,

    /// Network/HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The vendor API rejected the request
    #[error("Cloudinary API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Create an API error
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
