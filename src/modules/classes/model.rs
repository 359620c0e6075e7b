use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A class owned by a teacher.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeacherClass {
    pub id: Uuid,
    pub name: String,
    pub teacher_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// How a course is made available to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "access_mode", rename_all = "lowercase")]
pub enum AccessMode {
    /// Reference the shared course.
    Link,
    /// Duplicate the course for the class.
    Copy,
}

/// Grants a class access to a course. At most one record per
/// (class, course) pair, enforced by a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassCourseAccess {
    pub id: Uuid,
    pub class_id: Uuid,
    pub course_id: Uuid,
    pub mode: AccessMode,
    /// Who enabled the access.
    pub granted_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GrantCourseAccessDto {
    pub course_id: Uuid,
    pub mode: AccessMode,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassResponse {
    pub success: bool,
    #[serde(flatten)]
    pub class: TeacherClass,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassListResponse {
    pub success: bool,
    pub classes: Vec<TeacherClass>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseAccessResponse {
    pub success: bool,
    #[serde(flatten)]
    pub access: ClassCourseAccess,
}
