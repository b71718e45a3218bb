//! Middleware Module
//!
//! Request processing that runs before handler logic.
//!
//! - **`auth`** - Session cookie verification (`AuthUser` extractor)

pub mod auth;

pub use auth::{authenticate, AuthUser};
