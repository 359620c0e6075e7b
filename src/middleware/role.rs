//! Role-based authorization gate.
//!
//! Every protected route goes through [`authorize`], either via the
//! router-level middleware wrappers or via [`check_any_role`] inside a
//! handler. Keeping the decision in one place prevents drift between
//! endpoints.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// The single allow/deny predicate: does `role` appear in `allowed`?
///
/// On deny the failure kind is always `Forbidden`; unauthenticated
/// callers never reach this point (the `AuthUser` extractor rejects
/// them with `Unauthorized` first).
pub fn authorize(role: Role, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&role) {
        return Ok(());
    }
    Err(AppError::forbidden(format!(
        "Access denied. Required roles: {allowed:?}, but user has role: {role}"
    )))
}

/// Handler-level variant of [`authorize`] for checks that depend on
/// request data (e.g. class ownership exemptions).
pub fn check_any_role(auth_user: &AuthUser, allowed: &[Role]) -> Result<(), AppError> {
    authorize(auth_user.role(), allowed)
}

async fn require_roles(
    state: AppState,
    req: Request,
    next: Next,
    allowed: &[Role],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    authorize(auth_user.role(), allowed)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(state, req, next, &[Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Routes open to content authors (and admins).
pub async fn require_author(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(state, req, next, &[Role::Author, Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Routes open to teachers (and admins).
pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(state, req, next, &[Role::Teacher, Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_allows_listed_roles() {
        assert!(authorize(Role::Admin, &[Role::Admin]).is_ok());
        assert!(authorize(Role::Author, &[Role::Author, Role::Admin]).is_ok());
        assert!(authorize(Role::Teacher, &[Role::Teacher, Role::Admin]).is_ok());
    }

    #[test]
    fn authorize_denies_unlisted_roles() {
        let err = authorize(Role::Learner, &[Role::Author, Role::Admin]).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);

        assert!(authorize(Role::PendingAuthor, &[Role::Author]).is_err());
        assert!(authorize(Role::Teacher, &[Role::Admin]).is_err());
    }

    #[test]
    fn authorize_denies_on_empty_list() {
        assert!(authorize(Role::Admin, &[]).is_err());
    }
}
