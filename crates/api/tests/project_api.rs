//! HTTP-level integration tests for the `/api/v1/projects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_lifecycle_scenario(pool: PgPool) {
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/projects", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("\"project\""));

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({ "project": "Sunset" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!({ "id": 1 }));

    let response = get(common::build_test_app(pool.clone()), "/api/v1/projects/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([{ "id": 1, "project": "Sunset" }]));

    let response = get(common::build_test_app(pool), "/api/v1/projects/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Could not find project with id 999" })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_projects_returns_all_rows_in_order(pool: PgPool) {
    let first = common::create_project(&pool, "Autumn").await;
    let second = common::create_project(&pool, "Winter").await;

    let response = get(common::build_test_app(pool), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            { "id": first, "project": "Autumn" },
            { "id": second, "project": "Winter" },
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_projects_empty(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_returns_array_not_object(pool: PgPool) {
    let id = common::create_project(&pool, "Ocean").await;

    let response = get(common::build_test_app(pool), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["project"], "Ocean");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_with_non_numeric_id_is_store_error(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/projects/abc").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "22P02");
    assert!(json["error"]["constraint"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_ignores_extra_fields(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/projects",
        json!({ "project": "Dusk", "colour": "violet" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_with_numeric_name_stores_its_text(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({ "project": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(body_json(response).await, json!([{ "id": id, "project": "5" }]));
}
