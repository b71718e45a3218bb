/**
 * Backend Error Types
 *
 * This module defines the single error type returned by every handler.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - bad or duplicate input (400)
 * - `Unauthorized` - missing or invalid session token (401)
 * - `Forbidden` - authenticated, but not the owner of the resource (403)
 * - `NotFound` - the requested resource does not exist (404)
 *
 * ## Server Errors
 *
 * - `ServiceUnavailable` - an optional collaborator is not configured (503)
 * - `Database`, `Upload`, `Token`, `Hash`, `Internal` - unexpected failures (500)
 *
 * Server errors keep their cause for logging but never expose it to clients.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::media::UploadError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use inkpress::backend::error::BackendError;
///
/// let err = BackendError::validation("Username is required");
/// assert_eq!(err.status_code().as_u16(), 400);
///
/// let err = BackendError::forbidden("You are not the author");
/// assert_eq!(err.status_code().as_u16(), 403);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Bad or duplicate input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Missing, malformed, tampered or expired session token
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated caller does not own the resource
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// A collaborator the request needs is not configured
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Media provider failure
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Any other unexpected failure
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unauthorized error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden error (403)
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a service-unavailable error (503)
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Create an internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `ServiceUnavailable` - 503 Service Unavailable
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_)
            | Self::Upload(_)
            | Self::Token(_)
            | Self::Hash(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Client errors return their own message. Server errors return a
    /// generic message; the cause is only logged.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::ServiceUnavailable { message } => message.clone(),
            Self::Upload(_) => "Failed to upload cover image".to_string(),
            Self::Database(_) | Self::Token(_) | Self::Hash(_) | Self::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }
}
