use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A message addressed to a single user or an entire class.
///
/// `thread_id` equals the message's own id for thread roots and the
/// root's id for replies. `hidden_for` suppresses visibility per
/// recipient without deleting anything.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_user_id: Option<Uuid>,
    pub recipient_class_id: Option<Uuid>,
    pub body: String,
    pub thread_id: Uuid,
    pub hidden_for: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A message joined with sender/recipient identities for thread views.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ThreadMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sender_username: String,
    pub recipient_user_id: Option<Uuid>,
    pub recipient_username: Option<String>,
    pub recipient_class_id: Option<Uuid>,
    pub recipient_class_name: Option<String>,
    pub body: String,
    pub thread_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageDto {
    /// Exactly one of `recipient_user_id` / `recipient_class_id`.
    pub recipient_user_id: Option<Uuid>,
    pub recipient_class_id: Option<Uuid>,
    #[validate(length(min = 1))]
    pub body: String,
    /// Root message id when replying; absent for a new thread.
    pub thread_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ThreadQuery {
    /// Thread root id.
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(flatten)]
    pub message: Message,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ThreadResponse {
    pub success: bool,
    pub messages: Vec<ThreadMessage>,
}
