#![allow(dead_code)]

use std::sync::Arc;

use agency_core::projects::memory::InMemoryStore;
use agency_core::projects::ProjectService;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use agency_api::config::ServerConfig;
use agency_api::router::build_app_router;
use agency_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_max_connections: 5,
    }
}

/// Build the full application router over the given in-memory store.
///
/// Goes through `build_app_router`, so tests exercise the production
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app_with(store: Arc<InMemoryStore>) -> Router {
    let state = AppState::new(
        ProjectService::from_backend(store.clone()),
        store,
        test_config(),
    );
    build_app_router(state)
}

/// Build the application over a freshly seeded in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryStore::seeded()))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
