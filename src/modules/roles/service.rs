use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::audit::service::AuditService;
use crate::modules::users::model::{
    AuthorRequestOutcome, Role, approved_role, author_request_transition,
};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

use super::model::{RoleApprovalResponse, RoleRequestResponse};

pub struct RoleService;

impl RoleService {
    /// Self-service request for author rights.
    ///
    /// Privileged roles are rejected, `pending-author` is accepted
    /// idempotently, anything else transitions to `pending-author`.
    #[instrument(skip(db))]
    pub async fn request_author(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<RoleRequestResponse, AppError> {
        let user = UserService::get_user(db, user_id).await?;

        match author_request_transition(user.role) {
            AuthorRequestOutcome::AlreadyPrivileged => Err(AppError::bad_request(
                "Author, teacher or admin rights already present",
            )),
            AuthorRequestOutcome::AlreadyPending => Ok(RoleRequestResponse {
                success: true,
                role: user.role,
                already_pending: true,
            }),
            AuthorRequestOutcome::Transition => {
                sqlx::query("UPDATE users SET role = $2, updated_at = now() WHERE id = $1")
                    .bind(user_id)
                    .bind(Role::PendingAuthor)
                    .execute(db)
                    .await
                    .map_err(AppError::database)?;

                tracing::info!(%user_id, "role transitioned to pending-author");

                Ok(RoleRequestResponse {
                    success: true,
                    role: Role::PendingAuthor,
                    already_pending: false,
                })
            }
        }
    }

    /// Admin approval of a pending role request.
    #[instrument(skip(db))]
    pub async fn approve(
        db: &PgPool,
        admin_id: Uuid,
        user_id: Uuid,
    ) -> Result<RoleApprovalResponse, AppError> {
        let user = UserService::get_user(db, user_id).await?;

        let granted = approved_role(user.role).ok_or_else(|| {
            AppError::bad_request(format!(
                "User has no pending role request (current role: {})",
                user.role
            ))
        })?;

        sqlx::query("UPDATE users SET role = $2, updated_at = now() WHERE id = $1")
            .bind(user_id)
            .bind(granted)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        AuditService::record(
            db,
            "role.approve",
            Some(admin_id),
            Some("user"),
            Some(user_id),
            None,
            serde_json::json!({ "from": user.role, "to": granted }),
        )
        .await;

        Ok(RoleApprovalResponse {
            success: true,
            user_id,
            role: granted,
        })
    }
}
