#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use marvel_store::app::build_app;
use marvel_store::config::ServerConfig;
use marvel_store::models::CharacterRecord;
use marvel_store::repo::CharacterRepo;
use marvel_store::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_file: None,
    }
}

pub fn record(id: i64, name: &str, real_name: &str, rating: i32) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        real_name: real_name.to_string(),
        universe: "Earth-616".to_string(),
        rating,
    }
}

/// Iron Man (1) and Thor (2).
pub fn seeded_state() -> AppState {
    AppState::new(
        CharacterRepo::with_records(vec![
            record(1, "Iron Man", "Tony Stark", 5),
            record(2, "Thor", "Thor Odinson", 4),
        ]),
        test_config(),
    )
}

/// Build the full application router, mirroring `main.rs` so tests
/// exercise the same middleware stack.
pub fn build_test_app(state: AppState) -> Router {
    build_app(state)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
