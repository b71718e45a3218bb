/**
 * Application State Management
 *
 * `AppState` is the central state container cloned into every handler. It
 * implements `FromRef` for each of its parts so handlers can extract only
 * what they need, e.g. `State(pool): State<SqlitePool>`.
 *
 * Everything inside is either immutable after startup (session keys,
 * password hasher) or internally synchronized (the pool, the uploader).
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::PasswordHasher;
use crate::backend::media::MediaUploader;

/// Shared handle to the configured media uploader, if any
pub type MediaService = Option<Arc<dyn MediaUploader>>;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,

    /// Session token signing and verification keys
    pub session_keys: SessionKeys,

    /// Password hashing policy
    pub password_hasher: PasswordHasher,

    /// Cover image uploader
    ///
    /// `None` if no media credentials are configured. Requests that carry a
    /// file are then rejected with 503.
    pub media: MediaService,
}

impl AppState {
    /// Assemble the state from its parts
    pub fn new(
        db_pool: SqlitePool,
        session_keys: SessionKeys,
        password_hasher: PasswordHasher,
        media: MediaService,
    ) -> Self {
        Self {
            db_pool,
            session_keys,
            password_hasher,
            media,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.password_hasher
    }
}

impl FromRef<AppState> for MediaService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.media.clone()
    }
}
