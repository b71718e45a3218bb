//! Common test utilities and helpers
//!
//! - In-memory application fixtures
//! - Fake media uploaders
//! - Authentication helpers

pub mod auth_helpers;
pub mod database;
pub mod fake_media;

pub use auth_helpers::*;
pub use database::*;
pub use fake_media::*;
