//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── database.rs     - SQLite pool and schema bootstrap
//! ├── schema.sql      - Table definitions
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - App creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the database pool, session keys, the password hasher
//! and the optional media uploader. All of it is built once at startup and
//! cloned into each request.
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpress::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Database pool and schema
pub mod database;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::{create_app, StartupError};
pub use state::AppState;
