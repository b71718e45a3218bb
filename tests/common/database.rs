//! In-memory application fixture
//!
//! Every `TestApp` owns a fresh `sqlite::memory:` database, so tests never
//! see each other's rows.

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use sqlx::SqlitePool;

use inkpress::backend::auth::{PasswordHasher, SessionKeys};
use inkpress::backend::media::MediaUploader;
use inkpress::backend::routes::create_router;
use inkpress::backend::server::{database, AppState, ServerConfig};

/// Secret the test apps sign session tokens with
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Running application plus a handle on its database
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub keys: SessionKeys,
}

impl TestApp {
    /// App without a media uploader
    pub async fn new() -> Self {
        Self::build(None).await
    }

    /// App with the given media uploader
    pub async fn with_media(uploader: Arc<dyn MediaUploader>) -> Self {
        Self::build(Some(uploader)).await
    }

    async fn build(media: Option<Arc<dyn MediaUploader>>) -> Self {
        let config = ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: TEST_JWT_SECRET.to_string(),
            token_ttl: Duration::from_secs(600),
            bcrypt_cost: 4,
            ..Default::default()
        };

        let pool = database::connect(&config.database_url)
            .await
            .expect("Failed to open in-memory database");
        let keys = SessionKeys::new(&config.jwt_secret, config.token_ttl);

        let state = AppState::new(
            pool.clone(),
            keys.clone(),
            PasswordHasher::new(config.bcrypt_cost),
            media,
        );

        let server = TestServer::new(create_router(state, &config))
            .expect("Failed to start test server");

        Self { server, pool, keys }
    }
}
