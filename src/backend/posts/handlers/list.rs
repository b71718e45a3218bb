//! `GET /post` handler

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::posts::db::{self, PostWithAuthor, LIST_LIMIT};

/// Most recent posts, newest first, authors resolved
///
/// Public; no session needed.
pub async fn list_posts(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PostWithAuthor>>, BackendError> {
    let posts = db::list_recent_posts(&pool, LIST_LIMIT).await?;
    tracing::debug!(count = posts.len(), "Listed posts");
    Ok(Json(posts))
}
