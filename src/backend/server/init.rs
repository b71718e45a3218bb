/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and create the schema
 * 2. Build session keys and the password hasher
 * 3. Build the Cloudinary uploader, if credentials are configured
 * 4. Create the router with all routes and middleware
 *
 * Without media credentials the server still starts; only requests that
 * carry a cover image are refused.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::PasswordHasher;
use crate::backend::media::{CloudinaryUploader, MediaUploader};
use crate::backend::routes::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::database;
use crate::backend::server::state::{AppState, MediaService};

/// Failures that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("media client error: {0}")]
    Media(#[from] reqwest::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing Inkpress backend server");

    let db_pool = database::connect(&config.database_url).await?;
    let media = load_media(config)?;

    let app_state = AppState::new(
        db_pool,
        SessionKeys::new(&config.jwt_secret, config.token_ttl),
        PasswordHasher::new(config.bcrypt_cost),
        media,
    );

    let app = create_router(app_state, config);
    tracing::info!(cors_origins = ?config.cors_origins, "Router configured");

    Ok(app)
}

/// Build the cover image uploader from configuration
fn load_media(config: &ServerConfig) -> Result<MediaService, StartupError> {
    match &config.cloudinary {
        Some(cloudinary) => {
            let uploader = CloudinaryUploader::new(cloudinary, config.upload_timeout)?;
            tracing::info!(cloud_name = %cloudinary.cloud_name, "Cloudinary uploads enabled");
            Ok(Some(Arc::new(uploader) as Arc<dyn MediaUploader>))
        }
        None => {
            tracing::warn!("Cloudinary not configured, cover image uploads disabled");
            Ok(None)
        }
    }
}
