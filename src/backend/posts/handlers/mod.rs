//! Post Handlers Module
//!
//! # Handlers
//!
//! - **`create_post`** - POST /post - Create a post (session required)
//! - **`update_post`** - PUT /post - Update own post (session required)
//! - **`list_posts`** - GET /post - 20 most recent posts
//! - **`get_post`** - GET /post/{id} - Single post
//!
//! Create and update take `multipart/form-data` so a cover image can ride
//! along with the text fields.

/// Multipart form parsing
pub mod types;

/// Cover image upload
pub mod cover;

/// Create handler
pub mod create;

/// Update handler
pub mod update;

/// List handler
pub mod list;

/// Get handler
pub mod get;

pub use types::PostForm;

pub use create::create_post;
pub use get::get_post;
pub use list::list_posts;
pub use update::update_post;
