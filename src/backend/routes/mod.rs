//! Route Configuration Module
//!
//! - **`router`** - Router assembly and HTTP middleware (trace, CORS)
//! - **`api_routes`** - Account and post endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Endpoint registration
//! ```

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

pub use router::create_router;
