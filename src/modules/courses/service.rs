use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::SEED_USERNAME;
use crate::utils::errors::AppError;

use super::model::{Course, CreateCourseDto, UpdateCourseDto, normalize_category};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto), fields(title = %dto.title))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let category = normalize_category(&dto.category)?;
        let author = dto
            .author
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| "guest".to_string());

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, category, tags, author, progression_mode)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(category)
        .bind(&dto.tags)
        .bind(&author)
        .bind(dto.progression_mode.unwrap_or_default())
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(course)
    }

    pub async fn get_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY created_at")
            .fetch_all(db)
            .await
            .map_err(AppError::database)
    }

    pub async fn get_course(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(format!("Course with id {id} not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        // Re-validate the category whenever the caller supplies one.
        let category = dto
            .category
            .as_deref()
            .map(normalize_category)
            .transpose()?;

        sqlx::query_as::<_, Course>(
            "UPDATE courses
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 category = COALESCE($4, category),
                 tags = COALESCE($5, tags),
                 author = COALESCE($6, author),
                 lessons = COALESCE($7, lessons),
                 published = COALESCE($8, published),
                 progression_mode = COALESCE($9, progression_mode),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(category)
        .bind(&dto.tags)
        .bind(&dto.author)
        .bind(&dto.lessons)
        .bind(dto.published)
        .bind(dto.progression_mode)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("Course with id {id} not found")))
    }

    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Course with id {id} not found"
            )));
        }

        Ok(())
    }

    /// Blanket author reassignment: rewrites the author attribution of
    /// EVERY course, with no filter. Kept as a maintenance utility and
    /// flagged with a deprecation warning at the HTTP layer.
    #[instrument(skip(db))]
    pub async fn reassign_author(
        db: &PgPool,
        override_author: Option<&str>,
    ) -> Result<(String, i64, u64), AppError> {
        let author = match override_author {
            Some(a) if !a.is_empty() => a.to_string(),
            _ => SEED_USERNAME.to_string(),
        };

        let matched = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        let result = sqlx::query("UPDATE courses SET author = $1, updated_at = now()")
            .bind(&author)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        let modified = result.rows_affected();
        tracing::warn!(author, matched, modified, "blanket author reassignment executed");

        Ok((author, matched, modified))
    }
}
