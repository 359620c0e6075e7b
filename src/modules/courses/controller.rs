use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_any_role;
use crate::modules::audit::service::AuditService;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::courses::model::{
    CourseListResponse, CourseResponse, CreateCourseDto, ReassignAuthorDto,
    ReassignAuthorResponse, UpdateCourseDto,
};
use crate::modules::courses::service::CourseService;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{Json, Path};

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Missing fields or invalid category", body = ErrorResponse),
        (status = 403, description = "Author or admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<CreateCourseDto>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    check_any_role(&auth_user, &[Role::Author, Role::Admin])?;
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    let course = CourseService::create_course(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CourseResponse {
            success: true,
            course,
        }),
    ))
}

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses", body = CourseListResponse)
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(Json(CourseListResponse {
        success: true,
        courses,
    }))
}

/// Get a single course
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    Ok(Json(CourseResponse {
        success: true,
        course,
    }))
}

/// Update a course
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Invalid category", body = ErrorResponse),
        (status = 403, description = "Author or admin role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateCourseDto>,
) -> Result<Json<CourseResponse>, AppError> {
    check_any_role(&auth_user, &[Role::Author, Role::Admin])?;
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    let course = CourseService::update_course(&state.db, id, dto).await?;
    Ok(Json(CourseResponse {
        success: true,
        course,
    }))
}

/// Delete a course (admin only)
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_any_role(&auth_user, &[Role::Admin])?;
    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Reassign the author of every course
///
/// Blanket operation over the whole collection. Unsafe for production
/// use and slated for removal; responses carry a deprecation warning
/// header.
#[utoipa::path(
    post,
    path = "/api/courses/reassign-author",
    request_body = ReassignAuthorDto,
    responses(
        (status = 200, description = "Reassignment counts", body = ReassignAuthorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Author or admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn reassign_author(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<ReassignAuthorDto>,
) -> Result<Response, AppError> {
    check_any_role(&auth_user, &[Role::Author, Role::Admin])?;
    let (author, matched, modified) =
        CourseService::reassign_author(&state.db, dto.author.as_deref()).await?;

    AuditService::record(
        &state.db,
        "course.reassign_author",
        auth_user.user_id().ok(),
        Some("course"),
        None,
        None,
        json!({ "author": author, "matched": matched, "modified": modified }),
    )
    .await;

    let headers = AppendHeaders([(
        HeaderName::from_static("warning"),
        HeaderValue::from_static(
            "299 lernwerk \"deprecated maintenance endpoint, not safe for production\"",
        ),
    )]);

    Ok((
        headers,
        Json(ReassignAuthorResponse {
            success: true,
            author,
            matched,
            modified,
        }),
    )
        .into_response())
}
