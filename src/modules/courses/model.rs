//! Course entity, category allow-list and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppError;

/// Fixed category list: ten subjects plus a catch-all. Input is
/// matched case-insensitively and stored in canonical casing.
pub const CATEGORIES: [&str; 11] = [
    "Mathematik",
    "Deutsch",
    "Englisch",
    "Biologie",
    "Chemie",
    "Physik",
    "Geschichte",
    "Geografie",
    "Informatik",
    "Musik",
    "Sonstiges",
];

/// Resolves a caller-supplied category to its canonical casing, or a
/// validation error naming the offending value.
pub fn normalize_category(input: &str) -> Result<&'static str, AppError> {
    CATEGORIES
        .iter()
        .find(|canonical| canonical.eq_ignore_ascii_case(input))
        .copied()
        .ok_or_else(|| AppError::bad_request(format!("Invalid category: {input}")))
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "progression_mode", rename_all = "lowercase")]
pub enum ProgressionMode {
    Linear,
    #[default]
    Free,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Free-text attribution, not a user reference.
    pub author: String,
    /// Ordered lesson references.
    pub lessons: Vec<Uuid>,
    pub published: bool,
    pub progression_mode: ProgressionMode,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub progression_mode: Option<ProgressionMode>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub lessons: Option<Vec<Uuid>>,
    pub published: Option<bool>,
    pub progression_mode: Option<ProgressionMode>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReassignAuthorDto {
    /// Desired author name; the seed author when absent or empty.
    pub author: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub success: bool,
    #[serde(flatten)]
    pub course: Course,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub success: bool,
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReassignAuthorResponse {
    pub success: bool,
    pub author: String,
    pub matched: i64,
    pub modified: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_normalizes_case_insensitively() {
        assert_eq!(normalize_category("mathematik").unwrap(), "Mathematik");
        assert_eq!(normalize_category("MATHEMATIK").unwrap(), "Mathematik");
        assert_eq!(normalize_category("Informatik").unwrap(), "Informatik");
        assert_eq!(normalize_category("sonstiges").unwrap(), "Sonstiges");
    }

    #[test]
    fn category_rejects_unknown_values_naming_them() {
        let err = normalize_category("Sport").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(err.error.to_string().contains("Sport"));

        assert!(normalize_category("").is_err());
        assert!(normalize_category("Mathe").is_err());
    }

    #[test]
    fn category_list_has_ten_subjects_plus_catch_all() {
        assert_eq!(CATEGORIES.len(), 11);
        assert_eq!(*CATEGORIES.last().unwrap(), "Sonstiges");
    }

    #[test]
    fn progression_mode_defaults_to_free() {
        assert_eq!(ProgressionMode::default(), ProgressionMode::Free);
        assert_eq!(
            serde_json::to_string(&ProgressionMode::Linear).unwrap(),
            "\"linear\""
        );
    }
}
