use axum::extract::State;
use serde_json::json;

use crate::middleware::auth::AuthUser;
use crate::modules::audit::model::{AuditListResponse, CleanupParams, CleanupResponse};
use crate::modules::audit::service::AuditService;
use crate::modules::auth::model::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{Json, Query};

/// List recent audit entries
#[utoipa::path(
    get,
    path = "/api/audit",
    responses(
        (status = 200, description = "Recent audit entries", body = AuditListResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Audit"
)]
pub async fn list_audit(State(state): State<AppState>) -> Result<Json<AuditListResponse>, AppError> {
    let entries = AuditService::list_recent(&state.db).await?;
    Ok(Json(AuditListResponse {
        success: true,
        entries,
    }))
}

/// Purge audit entries older than the given day threshold
#[utoipa::path(
    delete,
    path = "/api/audit/cleanup",
    params(
        ("days" = Option<String>, Query, description = "Day threshold, clamped to [1, 365], default 90")
    ),
    responses(
        (status = 200, description = "Purge completed", body = CleanupResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Audit"
)]
pub async fn cleanup_audit(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<CleanupParams>,
) -> Result<Json<CleanupResponse>, AppError> {
    // Non-numeric input falls back to the default rather than erroring.
    let days_input = params.days.as_deref().and_then(|d| d.parse::<i64>().ok());
    let (deleted, days) = AuditService::cleanup(&state.db, days_input).await?;

    AuditService::record(
        &state.db,
        "audit.cleanup",
        auth_user.user_id().ok(),
        None,
        None,
        None,
        json!({ "deleted": deleted, "days": days }),
    )
    .await;

    Ok(Json(CleanupResponse {
        success: true,
        deleted,
        days,
    }))
}
