//! Posts Module
//!
//! Blog posts: storage, multipart handlers and author resolution.
//!
//! - **`db`** - Post models and database operations
//! - **`handlers`** - HTTP handlers for `/post`
//!
//! Only the author of a post may change it. Authors are fixed at creation.

/// Post models and database operations
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use db::{AuthorSummary, NewPost, Post, PostUpdate, PostWithAuthor, LIST_LIMIT};
pub use handlers::{create_post, get_post, list_posts, update_post};
