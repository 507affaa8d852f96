//! Profile surface: `/api/v1/users/me`.

mod common;

use serde_json::{json, Value};

use common::{create_note, register, spawn_server};

#[tokio::test]
async fn test_me_returns_public_profile() {
    let server = spawn_server().await;
    let (token, user) = register(&server, "ada@example.com", "hunter22").await;

    let response = server
        .get("/api/v1/users/me")
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Fetched profile successfully");
    assert_eq!(body["data"]["id"], user["id"]);
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_update_profile_names() {
    let server = spawn_server().await;
    let (token, _) = register(&server, "ada@example.com", "hunter22").await;

    let response = server
        .patch("/api/v1/users/me")
        .authorization_bearer(&token)
        .json(&json!({ "firstName": "Ada", "lastName": "Lovelace" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["data"]["firstName"], "Ada");
    assert_eq!(body["data"]["lastName"], "Lovelace");
    assert_eq!(body["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_update_profile_email_collision_conflicts() {
    let server = spawn_server().await;
    register(&server, "taken@example.com", "hunter22").await;
    let (token, _) = register(&server, "ada@example.com", "hunter22").await;

    let response = server
        .patch("/api/v1/users/me")
        .authorization_bearer(&token)
        .json(&json!({ "email": "taken@example.com" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["message"], "User with this email already exists");
}

#[tokio::test]
async fn test_update_profile_rejects_short_password() {
    let server = spawn_server().await;
    let (token, _) = register(&server, "ada@example.com", "hunter22").await;

    let response = server
        .patch("/api/v1/users/me")
        .authorization_bearer(&token)
        .json(&json!({ "password": "abc" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["errors"]["password"][0],
        "Password must be longer than or equal to 6 characters"
    );
}

#[tokio::test]
async fn test_password_change_rotates_credentials() {
    let server = spawn_server().await;
    let (token, _) = register(&server, "ada@example.com", "hunter22").await;

    let response = server
        .patch("/api/v1/users/me")
        .authorization_bearer(&token)
        .json(&json!({ "password": "new-secret" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let old = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "ada@example.com", "password": "hunter22" }))
        .await;
    assert_eq!(old.status_code(), 401);

    let new = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "ada@example.com", "password": "new-secret" }))
        .await;
    assert_eq!(new.status_code(), 200);
}

#[tokio::test]
async fn test_delete_me_removes_account_and_notes() {
    let server = spawn_server().await;
    let (ada_token, _) = register(&server, "ada@example.com", "hunter22").await;
    let (bob_token, _) = register(&server, "bob@example.com", "hunter22").await;
    create_note(&server, &ada_token, "Ada's note", "body").await;
    let bob_note = create_note(&server, &bob_token, "Bob's note", "body").await;

    let response = server
        .delete("/api/v1/users/me")
        .authorization_bearer(&ada_token)
        .await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Deleted user successfully");

    // The token still verifies cryptographically, but the account is gone.
    let profile = server
        .get("/api/v1/users/me")
        .authorization_bearer(&ada_token)
        .await;
    assert_eq!(profile.status_code(), 404);

    let login = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "ada@example.com", "password": "hunter22" }))
        .await;
    assert_eq!(login.status_code(), 401);

    // Bob's data is untouched by the cascade.
    let bobs = server
        .get(&format!(
            "/api/v1/notes/{}",
            bob_note["id"].as_str().unwrap()
        ))
        .authorization_bearer(&bob_token)
        .await;
    assert_eq!(bobs.status_code(), 200);
}
