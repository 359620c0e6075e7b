use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub course_id: Option<Uuid>,
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLessonDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub course_id: Option<Uuid>,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLessonDto {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub course_id: Option<Uuid>,
    pub position: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonResponse {
    pub success: bool,
    #[serde(flatten)]
    pub lesson: Lesson,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonListResponse {
    pub success: bool,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompleteLessonResponse {
    pub success: bool,
    /// False when the lesson was already in the caller's completed set.
    pub newly_completed: bool,
    pub stars: i32,
}
