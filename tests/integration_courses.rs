mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_course, create_test_user, get_auth_token, setup_test_app};
use http_body_util::BodyExt;
use lernwerk::modules::users::model::Role;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn reassign_request(token: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/courses/reassign-author")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap()
}

async fn course_authors(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar::<_, String>("SELECT author FROM courses ORDER BY author")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reassign_author_forbidden_for_learner_and_touches_nothing(pool: PgPool) {
    create_test_course(&pool, "Brüche", "anna").await;
    create_test_course(&pool, "Gleichungen", "ben").await;

    let learner = create_test_user(&pool, Role::Learner).await;
    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app.clone(), &learner.username, &learner.password).await;

    let response = app
        .oneshot(reassign_request(&token, json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);

    // No course document was modified.
    assert_eq!(course_authors(&pool).await, vec!["anna", "ben"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reassign_author_defaults_to_seed_account(pool: PgPool) {
    create_test_course(&pool, "Brüche", "anna").await;
    create_test_course(&pool, "Gleichungen", "ben").await;

    let author = create_test_user(&pool, Role::Author).await;
    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app.clone(), &author.username, &author.password).await;

    let response = app
        .oneshot(reassign_request(&token, json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let warning = response
        .headers()
        .get("warning")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(warning.starts_with("299"));

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["author"], "autor");
    assert_eq!(body["matched"], 2);
    assert_eq!(body["modified"], 2);

    assert_eq!(course_authors(&pool).await, vec!["autor", "autor"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_invalid_path_id_enveloped_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/courses/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}
