//! Authentication Module
//!
//! Account registration, credential checks and cookie-carried session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User model, password hashing and database operations
//! - **`sessions`** - JWT token signing and validation
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → bcrypt hash stored → `{id, username}` returned
//! 2. **Login**: username + password → hash verified → signed token set in the `token` cookie
//! 3. **Profile**: `token` cookie → signature and expiry checked → claims returned
//! 4. **Logout**: `token` cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never returned
//! - Tokens are HS256 JWTs with an expiry, carried in an HTTP-only cookie
//! - Nothing about sessions is stored server-side

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, profile, register, CredentialsRequest, UserResponse};
pub use sessions::{Claims, SessionKeys, TOKEN_COOKIE};
pub use users::{PasswordHasher, User};
