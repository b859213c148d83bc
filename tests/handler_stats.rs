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

#[tokio::test]
async fn test_stats_success() {
    let (server, _clock) = server();

    server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com/page", "shortcode": "stats1" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/shorturls/stats1").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com/page");
    assert_eq!(json["shortcode"], "stats1");
    assert_eq!(json["created"], "2025-01-01T12:00:00.000Z");
    assert_eq!(json["expiry"], "2025-01-01T12:30:00.000Z");
    assert_eq!(json["clicks"], 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _clock) = server();

    let response = server.get("/shorturls/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Short URL not found");
}

#[tokio::test]
async fn test_stats_available_after_expiry() {
    let (server, clock) = server();

    server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "old", "validity": 1 }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    assert_eq!(server.get("/old").await.status_code(), 302);
    clock.advance(Duration::hours(1));
    assert_eq!(server.get("/old").await.status_code(), 410);

    let response = server.get("/shorturls/old").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["clicks"], 1);
    assert_eq!(json["expiry"], "2025-01-01T12:01:00.000Z");
}
