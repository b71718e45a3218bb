/**
 * Server Configuration
 *
 * This module reads the server configuration from environment variables
 * once at startup. Values that are not set fall back to defaults suitable
 * for local development; values that are set but malformed fail startup.
 *
 * # Variables
 *
 * - `PORT` - listening port (default 4000)
 * - `DATABASE_URL` - SQLite connection string
 * - `JWT_SECRET` - session signing secret
 * - `TOKEN_TTL_SECS` - session lifetime in seconds (default 30 days)
 * - `BCRYPT_COST` - password hashing work factor (default 10)
 * - `CORS_ORIGINS` - comma-separated list of allowed origins
 * - `CLOUDINARY_CLOUD_NAME` / `CLOUDINARY_API_KEY` / `CLOUDINARY_API_SECRET`
 * - `MEDIA_UPLOAD_TIMEOUT_SECS` - upload client timeout (default 60)
 * - `MAX_UPLOAD_BYTES` - body limit on the post routes (default 10 MiB)
 */

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 4000;

/// Default SQLite connection string
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inkpress.db?mode=rwc";

/// Fallback signing secret used when `JWT_SECRET` is not set
pub const DEFAULT_JWT_SECRET: &str = "defaultSecret";

/// Default session lifetime (30 days)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest accepted bcrypt work factor
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest accepted bcrypt work factor
pub const MAX_BCRYPT_COST: u32 = 31;

/// Default allowed origin
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Default media upload timeout
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 60;

/// Default body limit for multipart routes (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// Why it was rejected
        reason: String,
    },
    /// Only some of the Cloudinary credentials are set
    #[error("incomplete media configuration: missing {0}")]
    IncompleteMedia(&'static str),
}

/// Cloudinary credentials
#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    /// Cloud name, part of the upload URL
    pub cloud_name: String,
    /// Public API key
    pub api_key: String,
    /// Secret used to sign upload requests
    pub api_secret: String,
}

impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Server configuration, loaded once at startup
#[derive(Clone)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// SQLite connection string
    pub database_url: String,
    /// Session signing secret
    pub jwt_secret: String,
    /// Session lifetime
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Allowed cross-origin hosts
    pub cors_origins: Vec<String>,
    /// Media provider credentials, if uploads are enabled
    pub cloudinary: Option<CloudinaryConfig>,
    /// Media upload client timeout
    pub upload_timeout: Duration,
    /// Body limit on multipart routes
    pub max_upload_bytes: usize,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cors_origins", &self.cors_origins)
            .field("cloudinary", &self.cloudinary)
            .field("upload_timeout", &self.upload_timeout)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            cloudinary: None,
            upload_timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = parse_or(&get, "PORT", defaults.port)?;
        let database_url = get("DATABASE_URL").unwrap_or(defaults.database_url);

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set, falling back to the built-in development secret");
                defaults.jwt_secret
            }
        };

        let token_ttl = Duration::from_secs(parse_or(
            &get,
            "TOKEN_TTL_SECS",
            DEFAULT_TOKEN_TTL_SECS,
        )?);

        let bcrypt_cost: u32 = parse_or(&get, "BCRYPT_COST", defaults.bcrypt_cost)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }

        let cors_origins = match get("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let cloudinary = load_cloudinary(&get)?;

        let upload_timeout = Duration::from_secs(parse_or(
            &get,
            "MEDIA_UPLOAD_TIMEOUT_SECS",
            DEFAULT_UPLOAD_TIMEOUT_SECS,
        )?);

        let max_upload_bytes = parse_or(&get, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            cors_origins,
            cloudinary,
            upload_timeout,
            max_upload_bytes,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

/// All three credentials or none
fn load_cloudinary<G>(get: &G) -> Result<Option<CloudinaryConfig>, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let cloud_name = get("CLOUDINARY_CLOUD_NAME");
    let api_key = get("CLOUDINARY_API_KEY");
    let api_secret = get("CLOUDINARY_API_SECRET");

    match (cloud_name, api_key, api_secret) {
        (None, None, None) => Ok(None),
        (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Some(CloudinaryConfig {
            cloud_name,
            api_key,
            api_secret,
        })),
        (None, _, _) => Err(ConfigError::IncompleteMedia("CLOUDINARY_CLOUD_NAME")),
        (_, None, _) => Err(ConfigError::IncompleteMedia("CLOUDINARY_API_KEY")),
        (_, _, None) => Err(ConfigError::IncompleteMedia("CLOUDINARY_API_SECRET")),
    }
}
