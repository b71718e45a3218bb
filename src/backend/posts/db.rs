/**
 * Post Database Operations
 *
 * Models and queries for the `posts` table. Authors are resolved with a join
 * on `users` so list and detail responses carry `{id, username}` instead of a
 * bare user id.
 *
 * Recency is `created_at DESC` with `rowid DESC` as tie-break, so posts
 * written within the same clock tick still come back newest first.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Maximum number of posts returned by `GET /post`
pub const LIST_LIMIT: i64 = 20;

/// Post as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Public URL of the cover image
    pub cover: Option<String>,
    /// Author's user ID
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author as embedded in post responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub username: String,
}

/// Post with its author resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: Option<String>,
    pub author: AuthorSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat join row, folded into `PostWithAuthor`
#[derive(sqlx::FromRow)]
struct PostAuthorRow {
    id: Uuid,
    title: String,
    summary: String,
    content: String,
    cover: Option<String>,
    author_id: Uuid,
    author_username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostAuthorRow> for PostWithAuthor {
    fn from(row: PostAuthorRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            summary: row.summary,
            content: row.content,
            cover: row.cover,
            author: AuthorSummary {
                id: row.author_id,
                username: row.author_username,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Fields for a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: Option<String>,
    pub author: Uuid,
}

/// Fields to overwrite on update
///
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover: Option<String>,
}

const POST_COLUMNS: &str =
    "id, title, summary, content, cover, author_id AS author, created_at, updated_at";

const POST_WITH_AUTHOR_SELECT: &str = r#"
    SELECT p.id, p.title, p.summary, p.content, p.cover,
           u.id AS author_id, u.username AS author_username,
           p.created_at, p.updated_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// Insert a new post
pub async fn create_post(pool: &SqlitePool, post: NewPost) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let query = format!(
        r#"
        INSERT INTO posts (id, title, summary, content, cover, author_id, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
        RETURNING {POST_COLUMNS}
        "#
    );

    let post = sqlx::query_as::<_, Post>(&query)
        .bind(id)
        .bind(post.title)
        .bind(post.summary)
        .bind(post.content)
        .bind(post.cover)
        .bind(post.author)
        .bind(now)
        .fetch_one(pool)
        .await?;

    Ok(post)
}

/// Get post by ID
///
/// # Returns
/// Post or None if not found
pub async fn get_post_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1");

    let post = sqlx::query_as::<_, Post>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(post)
}

/// Get post by ID with the author resolved
pub async fn get_post_with_author(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    let query = format!("{POST_WITH_AUTHOR_SELECT} WHERE p.id = ?1");

    let row = sqlx::query_as::<_, PostAuthorRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(PostWithAuthor::from))
}

/// Overwrite a post's fields and bump `updated_at`
///
/// # Returns
/// The post as stored after the update, or `RowNotFound` if the id is unknown
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    update: PostUpdate,
) -> Result<Post, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE posts
        SET title = COALESCE(?2, title),
            summary = COALESCE(?3, summary),
            content = COALESCE(?4, content),
            cover = COALESCE(?5, cover),
            updated_at = ?6
        WHERE id = ?1
        RETURNING {POST_COLUMNS}
        "#
    );

    let post = sqlx::query_as::<_, Post>(&query)
        .bind(id)
        .bind(update.title)
        .bind(update.summary)
        .bind(update.content)
        .bind(update.cover)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

    Ok(post)
}

/// Most recent posts, newest first, with authors resolved
pub async fn list_recent_posts(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let query = format!(
        "{POST_WITH_AUTHOR_SELECT} ORDER BY p.created_at DESC, p.rowid DESC LIMIT ?1"
    );

    let rows = sqlx::query_as::<_, PostAuthorRow>(&query)
        .bind(limit)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(PostWithAuthor::from).collect())
}
