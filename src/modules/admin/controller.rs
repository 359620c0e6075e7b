use axum::extract::State;
use serde_json::json;

use crate::middleware::auth::AuthUser;
use crate::modules::admin::model::{
    MigrateLessonsResponse, SeedAuthorDto, SeedAuthorResponse, StatusResponse, WipeResponse,
};
use crate::modules::admin::service::AdminService;
use crate::modules::audit::service::AuditService;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::users::model::SEED_USERNAME;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{Json, Path};

/// Bootstrap the seed author account
///
/// Idempotent upsert; every call rewrites the account's password hash.
#[utoipa::path(
    post,
    path = "/api/admin/seed-author",
    request_body = SeedAuthorDto,
    responses(
        (status = 200, description = "Seed account bootstrapped", body = SeedAuthorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn seed_author(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<SeedAuthorDto>,
) -> Result<Json<SeedAuthorResponse>, AppError> {
    let (id, created, generated_password) =
        AdminService::seed_author(&state.db, dto.password.as_deref()).await?;

    AuditService::record(
        &state.db,
        "admin.seed_author",
        auth_user.user_id().ok(),
        Some("user"),
        Some(id),
        None,
        json!({ "created": created }),
    )
    .await;

    Ok(Json(SeedAuthorResponse {
        success: true,
        id,
        username: SEED_USERNAME.to_string(),
        created,
        generated_password,
    }))
}

/// Normalize legacy lesson records
#[utoipa::path(
    post,
    path = "/api/admin/migrate-lessons",
    responses(
        (status = 200, description = "Migration counts", body = MigrateLessonsResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn migrate_lessons(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MigrateLessonsResponse>, AppError> {
    let (content_fixed, positions_fixed) = AdminService::migrate_lessons(&state.db).await?;

    AuditService::record(
        &state.db,
        "admin.migrate_lessons",
        auth_user.user_id().ok(),
        Some("lesson"),
        None,
        None,
        json!({ "content_fixed": content_fixed, "positions_fixed": positions_fixed }),
    )
    .await;

    Ok(Json(MigrateLessonsResponse {
        success: true,
        content_fixed,
        positions_fixed,
    }))
}

/// Wipe an entire collection
#[utoipa::path(
    delete,
    path = "/api/admin/wipe/{collection}",
    params(("collection" = String, Path, description = "Allow-listed collection name")),
    responses(
        (status = 200, description = "Wipe counts", body = WipeResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Unknown collection", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn wipe_collection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(collection): Path<String>,
) -> Result<Json<WipeResponse>, AppError> {
    let deleted = AdminService::wipe_collection(&state.db, &collection).await?;

    AuditService::record(
        &state.db,
        "admin.wipe_collection",
        auth_user.user_id().ok(),
        Some(&collection),
        None,
        None,
        json!({ "deleted": deleted }),
    )
    .await;

    Ok(Json(WipeResponse {
        success: true,
        collection,
        deleted,
    }))
}

/// Per-table document counts
#[utoipa::path(
    get,
    path = "/api/admin/status",
    responses(
        (status = 200, description = "Collection counts", body = StatusResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let counts = AdminService::status(&state.db).await?;
    Ok(Json(StatusResponse {
        success: true,
        counts,
    }))
}
