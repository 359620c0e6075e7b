use axum::{extract::State, http::StatusCode};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::messages::model::{
    MessageResponse, SendMessageDto, ThreadQuery, ThreadResponse,
};
use crate::modules::messages::service::MessageService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{Json, Path, Query};

/// Send a message to a user or a class
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageResponse),
        (status = 400, description = "Recipient missing or ambiguous", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Recipient or thread root not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn send_message(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<SendMessageDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    let message = MessageService::send(&state.db, auth_user.user_id()?, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message,
        }),
    ))
}

/// Fetch a message thread
#[utoipa::path(
    get,
    path = "/api/messages/thread",
    params(("id" = String, Query, description = "Thread root id")),
    responses(
        (status = 200, description = "Thread messages in chronological order", body = ThreadResponse),
        (status = 400, description = "Invalid thread id", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn get_thread(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<ThreadQuery>,
) -> Result<Json<ThreadResponse>, AppError> {
    let thread_id = Uuid::parse_str(&params.id)
        .map_err(|_| AppError::bad_request(format!("Invalid thread id: {}", params.id)))?;
    let messages = MessageService::get_thread(&state.db, thread_id, auth_user.user_id()?).await?;
    Ok(Json(ThreadResponse {
        success: true,
        messages,
    }))
}

/// Hide a message for the caller
#[utoipa::path(
    post,
    path = "/api/messages/{id}/hide",
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message hidden"),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn hide_message(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    MessageService::hide_for(&state.db, id, auth_user.user_id()?).await?;
    Ok(Json(json!({ "success": true })))
}
