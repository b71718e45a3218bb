//! `GET /post/{id}` handler

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::posts::db::{self, PostWithAuthor};

/// Single post with its author resolved
///
/// An id that does not parse is treated like an unknown id: 404.
pub async fn get_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<PostWithAuthor>, BackendError> {
    let post_id = Uuid::parse_str(&id).map_err(|_| {
        tracing::debug!(%id, "Malformed post id");
        BackendError::not_found("Post not found")
    })?;

    let post = db::get_post_with_author(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    Ok(Json(post))
}
