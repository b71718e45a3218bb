//! Inkpress - Blogging Backend Library
//!
//! Inkpress is a small blogging backend built on Axum. It handles user
//! registration and login with bcrypt-hashed credentials, cookie-carried JWT
//! sessions, and blog posts with optional cover images uploaded to Cloudinary.
//!
//! # Module Structure
//!
//! - **`backend`** - Everything the server needs
//!   - Server configuration, state and router assembly
//!   - Authentication (users, sessions, handlers)
//!   - Posts (storage and handlers)
//!   - Media uploads
//!   - Error types and their HTTP mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpress::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Every failure is rendered with
//! the same JSON envelope: `{"error": "...", "status": 400}`.

/// Backend server-side code
pub mod backend;
