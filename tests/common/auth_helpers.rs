//! Authentication test helpers

use axum::http::{header::COOKIE, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestServer};
use serde_json::json;
use uuid::Uuid;

/// Registered user and the session cookie value from logging in
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub token: String,
}

impl TestUser {
    /// `Cookie` header value carrying this user's session
    pub fn cookie_header(&self) -> String {
        format!("token={}", self.token)
    }
}

/// Register a user over HTTP
pub async fn register(server: &TestServer, username: &str, password: &str) -> Uuid {
    let response = server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().parse().unwrap()
}

/// Register and log in a user, returning the session
pub async fn create_test_user(server: &TestServer, username: &str, password: &str) -> TestUser {
    let id = register(server, username, password).await;

    let response = server
        .post("/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    TestUser {
        id,
        username: username.to_string(),
        token: response.cookie("token").value().to_string(),
    }
}

/// Attach a user's session cookie to a request
pub fn authed(request: TestRequest, user: &TestUser) -> TestRequest {
    request.add_header(COOKIE, HeaderValue::from_str(&user.cookie_header()).unwrap())
}
