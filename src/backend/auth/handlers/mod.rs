//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── profile.rs   - Current session handler
//! └── logout.rs    - Session cookie removal
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - Create an account
//! - **`login`** - POST /login - Verify credentials, set the `token` cookie
//! - **`profile`** - GET /profile - Decoded claims of the current session
//! - **`logout`** - POST /logout - Clear the `token` cookie

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

/// Logout handler
pub mod logout;

pub use types::{CredentialsRequest, UserResponse};

pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use register::register;
