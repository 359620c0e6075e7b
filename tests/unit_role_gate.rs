use axum::http::StatusCode;
use lernwerk::middleware::auth::AuthUser;
use lernwerk::middleware::role::{authorize, check_any_role};
use lernwerk::modules::auth::model::Claims;
use lernwerk::modules::users::model::{
    AuthorRequestOutcome, Role, approved_role, author_request_transition, is_reserved_username,
    registration_role,
};

fn create_test_auth_user(role: Role) -> AuthUser {
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        username: "test".to_string(),
        role,
        exp: 9999999999,
        iat: 1234567890,
    };
    AuthUser(claims)
}

#[test]
fn test_authorize_exact_match() {
    assert!(authorize(Role::Admin, &[Role::Admin]).is_ok());
    assert!(authorize(Role::Author, &[Role::Author, Role::Admin]).is_ok());
    assert!(authorize(Role::Teacher, &[Role::Teacher, Role::Admin]).is_ok());
}

#[test]
fn test_authorize_denies_with_forbidden() {
    let err = authorize(Role::Learner, &[Role::Author, Role::Admin]).unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[test]
fn test_authorize_pending_roles_hold_no_rights() {
    assert!(authorize(Role::PendingAuthor, &[Role::Author, Role::Admin]).is_err());
    assert!(authorize(Role::PendingTeacher, &[Role::Teacher, Role::Admin]).is_err());
}

#[test]
fn test_check_any_role_through_auth_user() {
    let admin = create_test_auth_user(Role::Admin);
    assert!(check_any_role(&admin, &[Role::Admin]).is_ok());

    let learner = create_test_auth_user(Role::Learner);
    assert!(check_any_role(&learner, &[Role::Author, Role::Admin]).is_err());
}

#[test]
fn test_check_any_role_empty_list() {
    let admin = create_test_auth_user(Role::Admin);
    assert!(check_any_role(&admin, &[]).is_err());
}

#[test]
fn test_registration_maps_elevated_requests_to_pending() {
    assert_eq!(registration_role(None).unwrap(), Role::Learner);
    assert_eq!(
        registration_role(Some("author")).unwrap(),
        Role::PendingAuthor
    );
    assert_eq!(
        registration_role(Some("teacher")).unwrap(),
        Role::PendingTeacher
    );
}

#[test]
fn test_registration_rejects_admin_and_unknown_roles() {
    let err = registration_role(Some("admin")).unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(registration_role(Some("pending-author")).is_err());
}

#[test]
fn test_author_request_state_machine() {
    // Privileged roles are rejected.
    for role in [Role::Author, Role::Teacher, Role::Admin] {
        assert_eq!(
            author_request_transition(role),
            AuthorRequestOutcome::AlreadyPrivileged
        );
    }
    // Already pending is idempotent.
    assert_eq!(
        author_request_transition(Role::PendingAuthor),
        AuthorRequestOutcome::AlreadyPending
    );
    // Everything else transitions.
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
fn test_approval_resolves_only_pending_states() {
    assert_eq!(approved_role(Role::PendingAuthor), Some(Role::Author));
    assert_eq!(approved_role(Role::PendingTeacher), Some(Role::Teacher));
    for role in [Role::Learner, Role::Author, Role::Teacher, Role::Admin] {
        assert_eq!(approved_role(role), None);
    }
}

#[test]
fn test_no_single_step_path_to_privileged_roles() {
    // Self-service never yields a privileged role directly: registration
    // and the author request both land in a pending state at most.
    assert!(!registration_role(Some("author")).unwrap().is_privileged());
    assert!(!registration_role(Some("teacher")).unwrap().is_privileged());
    assert!(!Role::PendingAuthor.is_privileged());
    assert!(approved_role(Role::Learner).is_none());
}

#[test]
fn test_reserved_usernames() {
    for name in ["admin", "Administrator", "TEACHER", "lehrer", "author", "Autor"] {
        assert!(is_reserved_username(name), "{name} should be reserved");
    }
    assert!(!is_reserved_username("alice"));
    assert!(!is_reserved_username("teach"));
}
