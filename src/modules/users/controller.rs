use axum::extract::State;
use validator::Validate;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::users::model::{ProfileResponse, ResetProgressResponse, UpdateProfileDto};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::Json;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "Caller profile", body = ProfileResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = UserService::get_user(&state.db, auth_user.user_id()?).await?;
    Ok(Json(ProfileResponse {
        success: true,
        id: user.id,
        username: user.username,
        name: user.name,
        email: user.email,
        role: user.role,
        stars: user.stars,
        completed_lessons: user.completed_lessons,
        class_id: user.class_id,
    }))
}

/// Update the caller's profile
#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Malformed input", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<Json<ProfileResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    let user = UserService::update_profile(
        &state.db,
        auth_user.user_id()?,
        dto.name.as_deref(),
        dto.email.as_deref(),
    )
    .await?;
    Ok(Json(ProfileResponse {
        success: true,
        id: user.id,
        username: user.username,
        name: user.name,
        email: user.email,
        role: user.role,
        stars: user.stars,
        completed_lessons: user.completed_lessons,
        class_id: user.class_id,
    }))
}

/// Reset the caller's lesson progress and stars
#[utoipa::path(
    post,
    path = "/api/users/profile/reset-progress",
    responses(
        (status = 200, description = "Progress reset", body = ResetProgressResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn reset_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ResetProgressResponse>, AppError> {
    UserService::reset_progress(&state.db, auth_user.user_id()?).await?;
    Ok(Json(ResetProgressResponse { success: true }))
}
