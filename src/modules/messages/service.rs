use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::service::ClassService;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

use super::model::{Message, SendMessageDto, ThreadMessage};

pub struct MessageService;

impl MessageService {
    /// Sends a message to a user or a class.
    ///
    /// Exactly one recipient kind must be present. A reply references
    /// the root message's id as its thread; a new root becomes its own
    /// thread.
    #[instrument(skip(db, dto), fields(sender = %sender_id))]
    pub async fn send(
        db: &PgPool,
        sender_id: Uuid,
        dto: SendMessageDto,
    ) -> Result<Message, AppError> {
        match (dto.recipient_user_id, dto.recipient_class_id) {
            (Some(_), Some(_)) | (None, None) => {
                return Err(AppError::bad_request(
                    "Exactly one of recipient_user_id or recipient_class_id is required",
                ));
            }
            (Some(user_id), None) => {
                UserService::get_user(db, user_id).await?;
            }
            (None, Some(class_id)) => {
                ClassService::get_class(db, class_id).await?;
            }
        }

        if let Some(thread_id) = dto.thread_id {
            let root_exists =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE id = $1")
                    .bind(thread_id)
                    .fetch_one(db)
                    .await
                    .map_err(AppError::database)?;
            if root_exists == 0 {
                return Err(AppError::not_found(format!(
                    "Thread root {thread_id} not found"
                )));
            }
        }

        let id = Uuid::new_v4();
        let thread_id = dto.thread_id.unwrap_or(id);

        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (id, sender_id, recipient_user_id, recipient_class_id, body, thread_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(id)
        .bind(sender_id)
        .bind(dto.recipient_user_id)
        .bind(dto.recipient_class_id)
        .bind(&dto.body)
        .bind(thread_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(message)
    }

    /// All messages of a thread, chronologically ordered, with sender
    /// and recipient identities populated. Messages the caller has
    /// hidden are filtered out.
    pub async fn get_thread(
        db: &PgPool,
        thread_id: Uuid,
        caller_id: Uuid,
    ) -> Result<Vec<ThreadMessage>, AppError> {
        let messages = sqlx::query_as::<_, ThreadMessage>(
            "SELECT m.id,
                    m.sender_id,
                    s.username AS sender_username,
                    m.recipient_user_id,
                    r.username AS recipient_username,
                    m.recipient_class_id,
                    c.name AS recipient_class_name,
                    m.body,
                    m.thread_id,
                    m.created_at
             FROM messages m
             JOIN users s ON s.id = m.sender_id
             LEFT JOIN users r ON r.id = m.recipient_user_id
             LEFT JOIN classes c ON c.id = m.recipient_class_id
             WHERE (m.thread_id = $1 OR m.id = $1)
               AND NOT ($2 = ANY(m.hidden_for))
             ORDER BY m.created_at",
        )
        .bind(thread_id)
        .bind(caller_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(messages)
    }

    /// Suppresses a message for the caller only.
    pub async fn hide_for(db: &PgPool, message_id: Uuid, caller_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE messages
             SET hidden_for = array_append(hidden_for, $2)
             WHERE id = $1 AND NOT ($2 = ANY(hidden_for))",
        )
        .bind(message_id)
        .bind(caller_id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            // Distinguish "missing" from "already hidden".
            let exists =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE id = $1")
                    .bind(message_id)
                    .fetch_one(db)
                    .await
                    .map_err(AppError::database)?;
            if exists == 0 {
                return Err(AppError::not_found(format!(
                    "Message with id {message_id} not found"
                )));
            }
        }

        Ok(())
    }
}
