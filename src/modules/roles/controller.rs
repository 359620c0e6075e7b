use axum::extract::State;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::roles::model::{RoleApprovalResponse, RoleRequestResponse};
use crate::modules::roles::service::RoleService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{Json, Path};

/// Request author rights for the caller
#[utoipa::path(
    post,
    path = "/api/roles/request-author",
    responses(
        (status = 200, description = "Request accepted or already pending", body = RoleRequestResponse),
        (status = 400, description = "Rights already present", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Roles"
)]
pub async fn request_author(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<RoleRequestResponse>, AppError> {
    let response = RoleService::request_author(&state.db, auth_user.user_id()?).await?;
    Ok(Json(response))
}

/// Approve a pending role request (admin only)
#[utoipa::path(
    post,
    path = "/api/roles/approve/{user_id}",
    params(("user_id" = Uuid, Path, description = "User with a pending role request")),
    responses(
        (status = 200, description = "Role granted", body = RoleApprovalResponse),
        (status = 400, description = "No pending request", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Roles"
)]
pub async fn approve_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RoleApprovalResponse>, AppError> {
    let response = RoleService::approve(&state.db, auth_user.user_id()?, user_id).await?;
    Ok(Json(response))
}
