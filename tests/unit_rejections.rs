use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use http_body_util::BodyExt;
use lernwerk::utils::extract::{Json, Path, Query};
use serde::Deserialize;
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Deserialize)]
struct CreateItem {
    name: String,
    count: i32,
}

#[derive(Deserialize)]
struct ListParams {
    limit: i64,
}

async fn create_item(Json(item): Json<CreateItem>) -> String {
    format!("{} {}", item.name, item.count)
}

async fn get_item(Path(id): Path<Uuid>) -> String {
    id.to_string()
}

async fn list_items(Query(params): Query<ListParams>) -> String {
    params.limit.to_string()
}

fn test_app() -> Router {
    Router::new()
        .route("/items", post(create_item).get(list_items))
        .route("/items/{id}", get(get_item))
}

async fn error_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_json_body_missing_field_is_enveloped_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"pencil"}"#))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("count"));
}

#[tokio::test]
async fn test_json_body_malformed_syntax_is_enveloped_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_json_content_type_is_enveloped_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .body(Body::from(r#"{"name":"pencil","count":3}"#))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_invalid_path_uuid_is_enveloped_bad_request() {
    let request = Request::builder()
        .method("GET")
        .uri("/items/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_query_param_is_enveloped_bad_request() {
    let request = Request::builder()
        .method("GET")
        .uri("/items?limit=abc")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_valid_input_passes_through_wrappers() {
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"pencil","count":3}"#))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let id = Uuid::new_v4();
    let request = Request::builder()
        .method("GET")
        .uri(format!("/items/{id}"))
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
