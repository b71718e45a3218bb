//! Media Module
//!
//! Cover images are not stored by this service. They are handed to an
//! external media host and only the returned public URL is kept on the post.
//!
//! # Module Structure
//!
//! ```text
//! media/
//! ├── mod.rs         - MediaUploader trait and UploadError
//! └── cloudinary.rs  - Cloudinary implementation
//! ```
//!
//! Uploads are a single attempt. Errors from the provider are returned to the
//! caller unchanged; there is no retry or backoff.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Cloudinary upload client
pub mod cloudinary;

pub use cloudinary::CloudinaryUploader;

/// Upload failures
#[derive(Debug, Error)]
pub enum UploadError {
    /// Transport failure (connection, timeout, body decoding)
    #[error("media provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with an error status
    #[error("media provider rejected upload ({status}): {message}")]
    Provider {
        /// HTTP status returned by the provider
        status: u16,
        /// Provider error message
        message: String,
    },

    /// The provider answered success but without a URL
    #[error("media provider response did not include a URL")]
    MissingUrl,
}

/// Something that can turn bytes into a public URL
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload an in-memory buffer and return its durable public URL
    async fn upload(&self, data: Bytes) -> Result<String, UploadError>;
}
