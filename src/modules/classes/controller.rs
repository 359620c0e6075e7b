use axum::{extract::State, http::StatusCode};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::AuthUser;
use crate::modules::audit::service::AuditService;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::classes::model::{
    ClassListResponse, ClassResponse, CourseAccessResponse, CreateClassDto, GrantCourseAccessDto,
};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{Json, Path};

/// Create a class owned by the caller
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = ClassResponse),
        (status = 403, description = "Teacher or admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
pub async fn create_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<CreateClassDto>,
) -> Result<(StatusCode, Json<ClassResponse>), AppError> {
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    let class = ClassService::create_class(&state.db, &dto.name, auth_user.user_id()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClassResponse {
            success: true,
            class,
        }),
    ))
}

/// List the caller's classes (all classes for admins)
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "Visible classes", body = ClassListResponse),
        (status = 403, description = "Teacher or admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
pub async fn get_classes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ClassListResponse>, AppError> {
    let classes =
        ClassService::get_classes(&state.db, auth_user.user_id()?, auth_user.role()).await?;
    Ok(Json(ClassListResponse {
        success: true,
        classes,
    }))
}

/// Grant a class access to a course
#[utoipa::path(
    post,
    path = "/api/classes/{id}/courses",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = GrantCourseAccessDto,
    responses(
        (status = 201, description = "Access granted", body = CourseAccessResponse),
        (status = 403, description = "Class owned by another teacher", body = ErrorResponse),
        (status = 404, description = "Class or course not found", body = ErrorResponse),
        (status = 409, description = "Access already granted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
pub async fn grant_course_access(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<GrantCourseAccessDto>,
) -> Result<(StatusCode, Json<CourseAccessResponse>), AppError> {
    let access = ClassService::grant_course_access(
        &state.db,
        id,
        dto.course_id,
        dto.mode,
        auth_user.user_id()?,
        auth_user.role(),
    )
    .await?;

    AuditService::record(
        &state.db,
        "class.grant_course_access",
        auth_user.user_id().ok(),
        Some("class"),
        Some(id),
        Some(dto.course_id),
        json!({ "mode": access.mode }),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CourseAccessResponse {
            success: true,
            access,
        }),
    ))
}
