//! User entity, role state machine and related DTOs.
//!
//! The [`Role`] enum is the core of the platform's permission model.
//! Roles are assigned at registration (never directly privileged),
//! promoted through pending states by administrators, and are sticky:
//! there is no downgrade path.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppError;

/// Username of the distinguished seed author account maintained by
/// the admin bootstrap endpoint and used as the default course author
/// for bulk reassignment.
pub const SEED_USERNAME: &str = "autor";

/// Usernames that may never be registered, matched case-insensitively.
pub const RESERVED_USERNAMES: [&str; 6] = [
    "admin",
    "administrator",
    "teacher",
    "lehrer",
    "author",
    SEED_USERNAME,
];

pub fn is_reserved_username(username: &str) -> bool {
    RESERVED_USERNAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(username))
}

/// Account role.
///
/// State machine: registration assigns `Learner` or one of the pending
/// states; admins approve `PendingAuthor` -> `Author` and
/// `PendingTeacher` -> `Teacher`. No self-service path skips a pending
/// stage, and privileged roles are never revoked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "user_role", rename_all = "kebab-case")]
pub enum Role {
    Learner,
    Author,
    Admin,
    Teacher,
    PendingAuthor,
    PendingTeacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Learner => "learner",
            Role::Author => "author",
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::PendingAuthor => "pending-author",
            Role::PendingTeacher => "pending-teacher",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "learner" => Ok(Role::Learner),
            "author" => Ok(Role::Author),
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "pending-author" => Ok(Role::PendingAuthor),
            "pending-teacher" => Ok(Role::PendingTeacher),
            other => Err(AppError::internal(anyhow::anyhow!(
                "invalid role: {other}"
            ))),
        }
    }

    /// Roles that already hold elevated rights.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Author | Role::Admin | Role::Teacher)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Role::PendingAuthor | Role::PendingTeacher)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role assigned at registration for a requested role.
///
/// Elevated requests map to the corresponding pending state; nothing
/// maps directly to a privileged role. Unknown values are a validation
/// error.
pub fn registration_role(desired: Option<&str>) -> Result<Role, AppError> {
    match desired {
        None | Some("") | Some("learner") => Ok(Role::Learner),
        Some("author") => Ok(Role::PendingAuthor),
        Some("teacher") => Ok(Role::PendingTeacher),
        Some(other) => Err(AppError::bad_request(format!(
            "Unknown requested role: {other}"
        ))),
    }
}

/// Outcome of a self-service author-role request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorRequestOutcome {
    /// Caller already holds author, teacher or admin rights.
    AlreadyPrivileged,
    /// Caller is already `pending-author`; the request is idempotent.
    AlreadyPending,
    /// Caller transitions to `pending-author`.
    Transition,
}

pub fn author_request_transition(current: Role) -> AuthorRequestOutcome {
    if current.is_privileged() {
        AuthorRequestOutcome::AlreadyPrivileged
    } else if current == Role::PendingAuthor {
        AuthorRequestOutcome::AlreadyPending
    } else {
        AuthorRequestOutcome::Transition
    }
}

/// Role granted when an admin approves a pending request, if any.
pub fn approved_role(current: Role) -> Option<Role> {
    match current {
        Role::PendingAuthor => Some(Role::Author),
        Role::PendingTeacher => Some(Role::Teacher),
        _ => None,
    }
}

/// A registered account.
///
/// `owner_teacher_id` and `class_id` are weak references used for
/// lookup only; accounts are never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: Option<String>,
    pub completed_lessons: Vec<Uuid>,
    pub stars: i32,
    pub role: Role,
    pub owner_teacher_id: Option<Uuid>,
    pub class_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Caller-facing profile view.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub success: bool,
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub stars: i32,
    pub completed_lessons: Vec<Uuid>,
    pub class_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetProgressResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_usernames_match_case_insensitively() {
        assert!(is_reserved_username("admin"));
        assert!(is_reserved_username("ADMIN"));
        assert!(is_reserved_username("Lehrer"));
        assert!(is_reserved_username("AuThOr"));
        assert!(is_reserved_username("autor"));
        assert!(!is_reserved_username("alice"));
        assert!(!is_reserved_username("administrat"));
    }

    #[test]
    fn registration_never_grants_privileged_roles() {
        assert_eq!(registration_role(None).unwrap(), Role::Learner);
        assert_eq!(registration_role(Some("learner")).unwrap(), Role::Learner);
        assert_eq!(
            registration_role(Some("author")).unwrap(),
            Role::PendingAuthor
        );
        assert_eq!(
            registration_role(Some("teacher")).unwrap(),
            Role::PendingTeacher
        );
        assert!(registration_role(Some("admin")).is_err());
        assert!(registration_role(Some("wizard")).is_err());
    }

    #[test]
    fn author_request_rejects_privileged_roles() {
        assert_eq!(
            author_request_transition(Role::Author),
            AuthorRequestOutcome::AlreadyPrivileged
        );
        assert_eq!(
            author_request_transition(Role::Teacher),
            AuthorRequestOutcome::AlreadyPrivileged
        );
        assert_eq!(
            author_request_transition(Role::Admin),
            AuthorRequestOutcome::AlreadyPrivileged
        );
    }

    #[test]
    fn author_request_is_idempotent_when_pending() {
        assert_eq!(
            author_request_transition(Role::PendingAuthor),
            AuthorRequestOutcome::AlreadyPending
        );
    }

    #[test]
    fn author_request_transitions_other_roles() {
        assert_eq!(
            author_request_transition(Role::Learner),
            AuthorRequestOutcome::Transition
        );
        assert_eq!(
            author_request_transition(Role::PendingTeacher),
            AuthorRequestOutcome::Transition
        );
    }

    #[test]
    fn approval_only_resolves_pending_states() {
        assert_eq!(approved_role(Role::PendingAuthor), Some(Role::Author));
        assert_eq!(approved_role(Role::PendingTeacher), Some(Role::Teacher));
        assert_eq!(approved_role(Role::Learner), None);
        assert_eq!(approved_role(Role::Author), None);
        assert_eq!(approved_role(Role::Admin), None);
    }

    #[test]
    fn role_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Role::PendingAuthor).unwrap(),
            "\"pending-author\""
        );
        assert_eq!(serde_json::to_string(&Role::Learner).unwrap(), "\"learner\"");

        let parsed: Role = serde_json::from_str("\"pending-teacher\"").unwrap();
        assert_eq!(parsed, Role::PendingTeacher);
    }

    #[test]
    fn role_parse_round_trips() {
        for role in [
            Role::Learner,
            Role::Author,
            Role::Admin,
            Role::Teacher,
            Role::PendingAuthor,
            Role::PendingTeacher,
        ] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
        assert!(Role::parse("superuser").is_err());
    }
}
