/**
 * Cloudinary Uploader
 *
 * Sends cover images to Cloudinary's upload API with `resource_type=auto`,
 * so the provider detects whether the bytes are an image, a video or a raw
 * file.
 *
 * # Signing
 *
 * Upload requests are signed with the API secret:
 *
 * ```text
 * signature = hex(sha256("timestamp=<unix seconds>" + api_secret))
 * ```
 *
 * and carry `signature_algorithm=sha256`.
 */

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::backend::media::{MediaUploader, UploadError};
use crate::backend::server::config::CloudinaryConfig;

/// Public Cloudinary API endpoint
pub const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";

/// Successful upload response (only the fields we read)
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Error response body: `{"error": {"message": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Cloudinary upload client
pub struct CloudinaryUploader {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
    api_secret: String,
}

impl std::fmt::Debug for CloudinaryUploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryUploader")
            .field("upload_url", &self.upload_url)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl CloudinaryUploader {
    /// Create an uploader against the public Cloudinary API
    pub fn new(config: &CloudinaryConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_base_url(config, timeout, CLOUDINARY_API_BASE)
    }

    /// Create an uploader against a different API host
    pub fn with_base_url(
        config: &CloudinaryConfig,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let upload_url = format!(
            "{}/v1_1/{}/auto/upload",
            base_url.trim_end_matches('/'),
            config.cloud_name
        );

        Ok(Self {
            client,
            upload_url,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    /// Upload endpoint this client posts to
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

/// Signature over the signed upload parameters
pub fn sign_upload(timestamp: i64, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("timestamp={}", timestamp).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, data: Bytes) -> Result<String, UploadError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_upload(timestamp, &self.api_secret);
        let size = data.len();

        let form = Form::new()
            .part("file", Part::bytes(data.to_vec()).file_name("upload"))
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            // Not part of the signed string; assumes the account accepts a
            // per-request algorithm rather than only an account-level one.
            .text("signature_algorithm", "sha256");

        tracing::debug!(size, url = %self.upload_url, "uploading cover image");

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "cover upload rejected");
            return Err(UploadError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let uploaded: UploadResponse = response.json().await?;
        let url = uploaded.secure_url.ok_or(UploadError::MissingUrl)?;

        tracing::info!(size, %url, "cover image uploaded");
        Ok(url)
    }
}
