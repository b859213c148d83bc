mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortlinks::api::handlers::register_handler;

fn server() -> TestServer {
    let (state, _clock, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/api/register", post(register_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_register_success() {
    let server = server();

    let response = server
        .post("/api/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "hunter2"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Registration successful");
}

#[tokio::test]
async fn test_register_missing_field() {
    let server = server();

    let response = server
        .post("/api/register")
        .json(&json!({ "username": "alice", "email": "alice@example.com" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Username, email and password are required");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = server();
    let body = json!({
        "username": "bob",
        "email": "bob@example.com",
        "password": "pw"
    });

    server
        .post("/api/register")
        .json(&body)
        .await
        .assert_status_ok();

    let response = server.post("/api/register").json(&body).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "User already exists");
}
