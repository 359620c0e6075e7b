use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use lernwerk::config::cors::CorsConfig;
use lernwerk::config::jwt::JwtConfig;
use lernwerk::modules::users::model::Role;
use lernwerk::router::init_router;
use lernwerk::state::AppState;
use lernwerk::utils::password::hash_password;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Insert a user directly, bypassing registration so elevated roles
/// can be set up.
pub async fn create_test_user(pool: &PgPool, role: Role) -> TestUser {
    let username = format!("user-{}", Uuid::new_v4());
    let password = "testpass123".to_string();
    let hashed = hash_password(&password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (username, name, password_hash, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(&username)
    .bind("Test User")
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        username,
        password,
    }
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, title: &str, author: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (title, description, category, author)
         VALUES ($1, 'Test description', 'Mathematik', $2)
         RETURNING id",
    )
    .bind(title)
    .bind(author)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn get_auth_token(app: axum::Router, username: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse login response. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    });
    body["access_token"]
        .as_str()
        .unwrap_or_else(|| {
            panic!(
                "No access_token in response. Status: {}, Body: {}",
                status, body
            )
        })
        .to_string()
}
