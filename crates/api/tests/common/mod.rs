#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use palette_picker_api::config::{Environment, ServerConfig};
use palette_picker_api::router::build_app_router;
use palette_picker_api::state::AppState;

/// Build a test `ServerConfig` whose static directories live under `root`.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        environment: Environment::Test,
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        public_dir: root.join("public"),
        jquery_dir: root.join("jquery"),
    }
}

/// Build the full application router for the given pool.
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// routes and middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config(Path::new("target/test-static")))
}

pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

/// A pool that never connects until a query is issued.
///
/// Handlers that reject a request before reaching the store can be tested
/// against it without a running database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("postgres://postgres@127.0.0.1:1/unreachable")
        .unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(raw)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Insert a project through the API and return its id.
pub async fn create_project(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({ "project": name }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
