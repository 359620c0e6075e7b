use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateLessonDto, Lesson, UpdateLessonDto};

pub struct LessonService;

impl LessonService {
    #[instrument(skip(db, dto), fields(title = %dto.title))]
    pub async fn create_lesson(db: &PgPool, dto: CreateLessonDto) -> Result<Lesson, AppError> {
        sqlx::query_as::<_, Lesson>(
            "INSERT INTO lessons (title, content, course_id, position)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(dto.course_id)
        .bind(dto.position)
        .fetch_one(db)
        .await
        .map_err(AppError::database)
    }

    pub async fn get_lessons(db: &PgPool) -> Result<Vec<Lesson>, AppError> {
        sqlx::query_as::<_, Lesson>("SELECT * FROM lessons ORDER BY position, created_at")
            .fetch_all(db)
            .await
            .map_err(AppError::database)
    }

    pub async fn get_lesson(db: &PgPool, id: Uuid) -> Result<Lesson, AppError> {
        sqlx::query_as::<_, Lesson>("SELECT * FROM lessons WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(format!("Lesson with id {id} not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_lesson(
        db: &PgPool,
        id: Uuid,
        dto: UpdateLessonDto,
    ) -> Result<Lesson, AppError> {
        sqlx::query_as::<_, Lesson>(
            "UPDATE lessons
             SET title = COALESCE($2, title),
                 content = COALESCE($3, content),
                 course_id = COALESCE($4, course_id),
                 position = COALESCE($5, position),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(dto.course_id)
        .bind(dto.position)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("Lesson with id {id} not found")))
    }

    pub async fn delete_lesson(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Lesson with id {id} not found"
            )));
        }

        Ok(())
    }

    /// Marks a lesson completed for the caller and awards a star.
    /// Idempotent per lesson: a second completion changes nothing.
    #[instrument(skip(db))]
    pub async fn complete_lesson(
        db: &PgPool,
        user_id: Uuid,
        lesson_id: Uuid,
    ) -> Result<(bool, i32), AppError> {
        // 404 before touching the user's progress.
        Self::get_lesson(db, lesson_id).await?;

        let result = sqlx::query(
            "UPDATE users
             SET completed_lessons = array_append(completed_lessons, $2),
                 stars = stars + 1,
                 updated_at = now()
             WHERE id = $1 AND NOT ($2 = ANY(completed_lessons))",
        )
        .bind(user_id)
        .bind(lesson_id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        let newly_completed = result.rows_affected() > 0;

        let stars = sqlx::query_scalar::<_, i32>("SELECT stars FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(format!("User with id {user_id} not found")))?;

        Ok((newly_completed, stars))
    }
}
