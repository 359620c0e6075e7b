use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(format!("User with id {id} not found")))
    }

    /// Clears the caller's completed lessons and stars.
    #[instrument(skip(db))]
    pub async fn reset_progress(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE users
             SET completed_lessons = '{}', stars = 0, updated_at = now()
             WHERE id = $1",
        )
        .bind(user_id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "User with id {user_id} not found"
            )));
        }

        Ok(())
    }

    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("User with id {user_id} not found")))
    }
}
