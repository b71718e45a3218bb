//! Backend Module
//!
//! This module contains all server-side code for Inkpress: the Axum server
//! setup, the authentication and post handlers, the Cloudinary uploader and
//! the SQLite persistence layer.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, database bootstrap, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, JWT sessions, register/login/profile/logout handlers
//! - **`posts`** - Post storage and create/update/list/get handlers
//! - **`media`** - Media uploader trait and the Cloudinary client
//! - **`middleware`** - Session extraction from the `token` cookie
//! - **`error`** - `BackendError` and its HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state, database, init
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Blog posts
//! ├── media/          - Cover image uploads
//! ├── middleware/     - Session extractor
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Post-mutating requests pass through the [`middleware::AuthUser`] extractor
//! before any handler logic runs. The post handlers call the media uploader
//! only when the request carries a file, then commit to the database.
//!
//! # State Management
//!
//! [`server::AppState`] is cloned into every handler. It holds the SQLite
//! pool, the immutable session keys and password hasher, and the optional
//! media uploader. There is no other shared mutable state.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Blog posts
pub mod posts;

/// Cover image uploads
pub mod media;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
