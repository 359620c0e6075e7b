use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::service::CourseService;
use crate::modules::users::model::Role;
use crate::utils::errors::AppError;

use super::model::{AccessMode, ClassCourseAccess, TeacherClass};

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db))]
    pub async fn create_class(
        db: &PgPool,
        name: &str,
        teacher_id: Uuid,
    ) -> Result<TeacherClass, AppError> {
        sqlx::query_as::<_, TeacherClass>(
            "INSERT INTO classes (name, teacher_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(teacher_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)
    }

    /// Classes visible to the caller: their own for teachers, all of
    /// them for admins.
    pub async fn get_classes(
        db: &PgPool,
        caller_id: Uuid,
        caller_role: Role,
    ) -> Result<Vec<TeacherClass>, AppError> {
        let classes = if caller_role == Role::Admin {
            sqlx::query_as::<_, TeacherClass>("SELECT * FROM classes ORDER BY created_at")
                .fetch_all(db)
                .await
        } else {
            sqlx::query_as::<_, TeacherClass>(
                "SELECT * FROM classes WHERE teacher_id = $1 ORDER BY created_at",
            )
            .bind(caller_id)
            .fetch_all(db)
            .await
        }
        .map_err(AppError::database)?;

        Ok(classes)
    }

    pub async fn get_class(db: &PgPool, id: Uuid) -> Result<TeacherClass, AppError> {
        sqlx::query_as::<_, TeacherClass>("SELECT * FROM classes WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(format!("Class with id {id} not found")))
    }

    /// Grants a class access to a course. Teachers may only grant for
    /// their own classes; admins are exempt. A second grant for the
    /// same pair is a conflict.
    #[instrument(skip(db))]
    pub async fn grant_course_access(
        db: &PgPool,
        class_id: Uuid,
        course_id: Uuid,
        mode: AccessMode,
        caller_id: Uuid,
        caller_role: Role,
    ) -> Result<ClassCourseAccess, AppError> {
        let class = Self::get_class(db, class_id).await?;

        if caller_role != Role::Admin && class.teacher_id != caller_id {
            return Err(AppError::forbidden(
                "Access denied. Class is owned by another teacher.",
            ));
        }

        CourseService::get_course(db, course_id).await?;

        let access = sqlx::query_as::<_, ClassCourseAccess>(
            "INSERT INTO class_course_access (class_id, course_id, mode, granted_by)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(class_id)
        .bind(course_id)
        .bind(mode)
        .bind(caller_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                AppError::conflict("Course access already granted to this class")
            } else {
                AppError::database(e)
            }
        })?;

        Ok(access)
    }
}
