//! Post API integration tests
//!
//! Create, update, list and get over HTTP, with fake media uploaders
//! standing in for Cloudinary.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use inkpress::backend::error::ErrorBody;
use inkpress::backend::posts::{Post, PostWithAuthor};

use crate::common::{authed, create_test_user, FailingUploader, RecordingUploader, TestApp, TestUser};

fn post_form(title: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title)
        .add_text("summary", format!("{} summary", title))
        .add_text("content", format!("<p>{}</p>", title))
}

fn cover(bytes: &[u8]) -> Part {
    Part::bytes(bytes.to_vec())
        .file_name("cover.png")
        .mime_type("image/png")
}

async fn create(app: &TestApp, user: &TestUser, form: MultipartForm) -> Post {
    let response = authed(app.server.post("/post"), user).multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

async fn count_posts(app: &TestApp) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    count
}

#[tokio::test]
async fn test_create_post_requires_session() {
    let app = TestApp::new().await;

    let response = app.server.post("/post").multipart(post_form("Hello")).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(count_posts(&app).await, 0);
}

#[tokio::test]
async fn test_create_post_without_file() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let post = create(&app, &user, post_form("Hello")).await;

    assert_eq!(post.title, "Hello");
    assert_eq!(post.summary, "Hello summary");
    assert_eq!(post.content, "<p>Hello</p>");
    assert_eq!(post.cover, None);
    assert_eq!(post.author, user.id);
}

#[tokio::test]
async fn test_create_post_response_shape() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let response = authed(app.server.post("/post"), &user)
        .multipart(post_form("Hello"))
        .await;

    let body: serde_json::Value = response.json();
    assert!(body["cover"].is_null());
    assert_eq!(body["author"], user.id.to_string());
    assert!(body.get("createdAt").is_some());
    assert!(body.get("updatedAt").is_some());
}

#[tokio::test]
async fn test_create_post_with_file_uploads_cover() {
    let uploader = Arc::new(RecordingUploader::default());
    let app = TestApp::with_media(uploader.clone()).await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let post = create(
        &app,
        &user,
        post_form("Hello").add_part("file", cover(b"PNGDATA")),
    )
    .await;

    assert_eq!(post.cover.as_deref(), Some("https://cdn.test/covers/1.png"));
    assert_eq!(uploader.calls(), 1);
    assert_eq!(uploader.received()[0].as_ref(), b"PNGDATA");
}

#[tokio::test]
async fn test_create_post_with_empty_file_skips_upload() {
    let uploader = Arc::new(RecordingUploader::default());
    let app = TestApp::with_media(uploader.clone()).await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let post = create(&app, &user, post_form("Hello").add_part("file", cover(b""))).await;

    assert_eq!(post.cover, None);
    assert_eq!(uploader.calls(), 0);
}

#[tokio::test]
async fn test_create_post_upload_failure_writes_nothing() {
    let app = TestApp::with_media(Arc::new(FailingUploader)).await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let response = authed(app.server.post("/post"), &user)
        .multipart(post_form("Hello").add_part("file", cover(b"PNGDATA")))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Failed to upload cover image");
    assert_eq!(count_posts(&app).await, 0);
}

#[tokio::test]
async fn test_create_post_with_file_but_no_media_configured() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let response = authed(app.server.post("/post"), &user)
        .multipart(post_form("Hello").add_part("file", cover(b"PNGDATA")))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(count_posts(&app).await, 0);
}

#[tokio::test]
async fn test_create_post_rejects_json_body() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let response = authed(app.server.post("/post"), &user)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_post_by_author() {
    let uploader = Arc::new(RecordingUploader::default());
    let app = TestApp::with_media(uploader.clone()).await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;
    let original = create(
        &app,
        &user,
        post_form("Before").add_part("file", cover(b"OLD")),
    )
    .await;

    let response = authed(app.server.put("/post"), &user)
        .multipart(post_form("After").add_text("id", original.id.to_string()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Post = response.json();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "After");
    assert_eq!(updated.content, "<p>After</p>");
    assert_eq!(updated.cover, original.cover);
    assert_eq!(updated.author, user.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(uploader.calls(), 1);
}

#[tokio::test]
async fn test_update_post_replaces_cover() {
    let uploader = Arc::new(RecordingUploader::default());
    let app = TestApp::with_media(uploader.clone()).await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;
    let original = create(
        &app,
        &user,
        post_form("Post").add_part("file", cover(b"OLD")),
    )
    .await;

    let response = authed(app.server.put("/post"), &user)
        .multipart(
            post_form("Post")
                .add_text("id", original.id.to_string())
                .add_part("file", cover(b"NEW")),
        )
        .await;

    let updated: Post = response.json();
    assert_eq!(updated.cover.as_deref(), Some("https://cdn.test/covers/2.png"));
    assert_eq!(uploader.received()[1].as_ref(), b"NEW");
}

#[tokio::test]
async fn test_update_post_by_non_author_is_forbidden() {
    let uploader = Arc::new(RecordingUploader::default());
    let app = TestApp::with_media(uploader.clone()).await;
    let alice = create_test_user(&app.server, "alice", "hunter22").await;
    let mallory = create_test_user(&app.server, "mallory", "trustme").await;
    let original = create(&app, &alice, post_form("Mine")).await;

    let response = authed(app.server.put("/post"), &mallory)
        .multipart(
            post_form("Defaced")
                .add_text("id", original.id.to_string())
                .add_part("file", cover(b"EVIL")),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: ErrorBody = response.json();
    assert_eq!(body.error, "You are not the author");
    assert_eq!(uploader.calls(), 0);

    let stored: PostWithAuthor = app
        .server
        .get(&format!("/post/{}", original.id))
        .await
        .json();
    assert_eq!(stored.title, "Mine");
    assert_eq!(stored.updated_at, original.updated_at);
    assert_eq!(stored.author.id, alice.id);
}

#[tokio::test]
async fn test_update_missing_post() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let response = authed(app.server.put("/post"), &user)
        .multipart(post_form("Ghost").add_text("id", Uuid::new_v4().to_string()))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = authed(app.server.put("/post"), &user)
        .multipart(post_form("Ghost").add_text("id", "not-a-uuid"))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_id() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;

    let response = authed(app.server.put("/post"), &user)
        .multipart(post_form("No id"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_requires_session() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;
    let original = create(&app, &user, post_form("Mine")).await;

    let response = app
        .server
        .put("/post")
        .multipart(post_form("Anon").add_text("id", original.id.to_string()))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_posts_newest_first_capped() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;
    for i in 0..22 {
        create(&app, &user, post_form(&format!("Post {}", i))).await;
    }

    let response = app.server.get("/post").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let posts: Vec<PostWithAuthor> = response.json();
    assert_eq!(posts.len(), 20);
    assert_eq!(posts[0].title, "Post 21");
    assert_eq!(posts[19].title, "Post 2");
    assert!(posts
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    assert!(posts.iter().all(|post| post.author.username == "alice"));
}

#[tokio::test]
async fn test_list_posts_resolves_each_author() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice", "hunter22").await;
    let bob = create_test_user(&app.server, "bob", "builder").await;
    create(&app, &alice, post_form("From alice")).await;
    create(&app, &bob, post_form("From bob")).await;

    let posts: Vec<PostWithAuthor> = app.server.get("/post").await.json();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].author.username, bob.username);
    assert_eq!(posts[0].author.id, bob.id);
    assert_eq!(posts[1].author.username, alice.username);
    assert_eq!(posts[1].author.id, alice.id);
}

#[tokio::test]
async fn test_get_post() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;
    let post = create(&app, &user, post_form("Hello")).await;

    let response = app.server.get(&format!("/post/{}", post.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["author"]["username"], "alice");
    assert_eq!(body["author"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get(&format!("/post/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.server.get("/post/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Post not found");
}

#[tokio::test]
async fn test_created_post_reads_back_unchanged() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice", "hunter22").await;
    let created = create(&app, &user, post_form("Round trip")).await;

    let fetched: PostWithAuthor = app
        .server
        .get(&format!("/post/{}", created.id))
        .await
        .json();

    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.summary, created.summary);
    assert_eq!(fetched.content, created.content);
    assert_eq!(fetched.cover, created.cover);
    assert_eq!(fetched.author.id, created.author);
    assert_eq!(fetched.created_at, created.created_at);
}
