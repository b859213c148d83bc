mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use chrono::Duration;
use serde_json::json;
use shortlinks::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use shortlinks::domain::clock::ManualClock;
use std::sync::Arc;

fn server() -> (TestServer, Arc<ManualClock>) {
    let (state, clock, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/{shortcode}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), clock)
}

async fn create_link(server: &TestServer, code: &str, url: &str, validity: i64) {
    server
        .post("/shorturls")
        .json(&json!({ "url": url, "shortcode": code, "validity": validity }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, _clock) = server();
    create_link(&server, "redirect1", "https://example.com/target", 30).await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _clock) = server();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (server, _clock) = server();
    create_link(&server, "counted", "https://example.com", 30).await;

    for _ in 0..3 {
        assert_eq!(server.get("/counted").await.status_code(), 302);
    }

    let json = server
        .get("/shorturls/counted")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["clicks"], 3);
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let (server, clock) = server();
    create_link(&server, "short", "https://example.com", 1).await;

    clock.advance(Duration::minutes(2));

    let response = server.get("/short").await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Short URL has expired");

    let stats = server
        .get("/shorturls/short")
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["clicks"], 0);
}

#[tokio::test]
async fn test_redirect_at_exact_expiry_still_works() {
    let (server, clock) = server();
    create_link(&server, "edge", "https://example.com", 5).await;

    clock.advance(Duration::minutes(5));
    assert_eq!(server.get("/edge").await.status_code(), 302);

    clock.advance(Duration::milliseconds(1));
    assert_eq!(server.get("/edge").await.status_code(), 410);
}
