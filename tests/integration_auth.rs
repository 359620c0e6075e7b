mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, setup_test_app};
use http_body_util::BodyExt;
use lernwerk::modules::users::model::Role;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn register_request(payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_success(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(register_request(json!({
            "username": "alice",
            "name": "Alice",
            "password": "secret123"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "learner");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_missing_fields_enveloped_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(register_request(json!({ "username": "alice" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_reserved_username_forbidden(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(register_request(json!({
            "username": "Admin",
            "name": "Mallory",
            "password": "secret123"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);

    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE LOWER(username) = 'admin'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_username_conflict(pool: PgPool) {
    let existing = create_test_user(&pool, Role::Learner).await;
    let app = setup_test_app(pool.clone()).await;

    // Case differs; the duplicate check is case-insensitive.
    let response = app
        .oneshot(register_request(json!({
            "username": existing.username.to_uppercase(),
            "name": "Impostor",
            "password": "secret123"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);

    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE LOWER(username) = LOWER($1)",
    )
    .bind(&existing.username)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_author_request_lands_in_pending_state(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(register_request(json!({
            "username": "bob",
            "name": "Bob",
            "password": "secret123",
            "desired_role": "author"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["role"], "pending-author");
    assert_eq!(body["role_pending"], "pending-author");
}
