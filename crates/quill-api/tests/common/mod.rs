//! Shared setup for API integration tests: an in-memory database behind
//! a real router, driven through `axum_test::TestServer`.

use axum_test::TestServer;
use chrono::Duration;
use serde_json::{json, Value};

use quill_api::{build_router, AppState};
use quill_auth::TokenSigner;
use quill_db::test_fixtures::TestDatabase;

pub async fn spawn_server() -> TestServer {
    spawn_server_with_ttl(Duration::hours(1)).await
}

pub async fn spawn_server_with_ttl(ttl: Duration) -> TestServer {
    let test_db = TestDatabase::new().await;
    let tokens = TokenSigner::new("integration-test-secret", ttl);
    let app = build_router(AppState::new(&test_db.db, tokens));
    TestServer::new(app).expect("test server")
}

/// Register an account and return `(access_token, user)` from the
/// response payload.
pub async fn register(server: &TestServer, email: &str, password: &str) -> (String, Value) {
    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": email,
            "password": password,
            "confirmPassword": password,
            "firstName": "Test",
            "lastName": "User",
        }))
        .await;
    assert_eq!(response.status_code(), 201, "{}", response.text());

    let body: Value = response.json();
    let token = body["data"]["access_token"]
        .as_str()
        .expect("access_token")
        .to_string();
    (token, body["data"]["user"].clone())
}

/// Create a note as the token holder and return it.
pub async fn create_note(server: &TestServer, token: &str, title: &str, content: &str) -> Value {
    let response = server
        .post("/api/v1/notes")
        .authorization_bearer(token)
        .json(&json!({ "title": title, "content": content }))
        .await;
    assert_eq!(response.status_code(), 201, "{}", response.text());

    let body: Value = response.json();
    body["data"].clone()
}
