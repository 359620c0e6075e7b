use axum::{extract::State, http::StatusCode};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_any_role;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::lessons::model::{
    CompleteLessonResponse, CreateLessonDto, LessonListResponse, LessonResponse, UpdateLessonDto,
};
use crate::modules::lessons::service::LessonService;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{Json, Path};

/// Create a lesson
#[utoipa::path(
    post,
    path = "/api/lessons",
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Lesson created", body = LessonResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 403, description = "Author or admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<CreateLessonDto>,
) -> Result<(StatusCode, Json<LessonResponse>), AppError> {
    check_any_role(&auth_user, &[Role::Author, Role::Admin])?;
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    let lesson = LessonService::create_lesson(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(LessonResponse {
            success: true,
            lesson,
        }),
    ))
}

/// List all lessons
#[utoipa::path(
    get,
    path = "/api/lessons",
    responses(
        (status = 200, description = "All lessons", body = LessonListResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
pub async fn get_lessons(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<LessonListResponse>, AppError> {
    let lessons = LessonService::get_lessons(&state.db).await?;
    Ok(Json(LessonListResponse {
        success: true,
        lessons,
    }))
}

/// Get a single lesson
#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    params(("id" = Uuid, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "The lesson", body = LessonResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LessonResponse>, AppError> {
    let lesson = LessonService::get_lesson(&state.db, id).await?;
    Ok(Json(LessonResponse {
        success: true,
        lesson,
    }))
}

/// Update a lesson
#[utoipa::path(
    put,
    path = "/api/lessons/{id}",
    params(("id" = Uuid, Path, description = "Lesson id")),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "Lesson updated", body = LessonResponse),
        (status = 403, description = "Author or admin role required", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateLessonDto>,
) -> Result<Json<LessonResponse>, AppError> {
    check_any_role(&auth_user, &[Role::Author, Role::Admin])?;
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    let lesson = LessonService::update_lesson(&state.db, id, dto).await?;
    Ok(Json(LessonResponse {
        success: true,
        lesson,
    }))
}

/// Delete a lesson (admin only)
#[utoipa::path(
    delete,
    path = "/api/lessons/{id}",
    params(("id" = Uuid, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Lesson deleted"),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_any_role(&auth_user, &[Role::Admin])?;
    LessonService::delete_lesson(&state.db, id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Mark a lesson completed for the caller
#[utoipa::path(
    post,
    path = "/api/lessons/{id}/complete",
    params(("id" = Uuid, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Completion state", body = CompleteLessonResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
pub async fn complete_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<CompleteLessonResponse>, AppError> {
    let (newly_completed, stars) =
        LessonService::complete_lesson(&state.db, auth_user.user_id()?, id).await?;
    Ok(Json(CompleteLessonResponse {
        success: true,
        newly_completed,
        stars,
    }))
}
