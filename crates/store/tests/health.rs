//! Integration tests for the health check endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, seeded_state};

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(seeded_state());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["characters"], 2);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(seeded_state());
    let response = get(app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
