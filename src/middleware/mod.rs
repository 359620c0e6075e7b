//! Authentication and authorization middleware.
//!
//! - [`auth`]: `AuthUser` extractor that validates the JWT once and
//!   exposes typed claims (user id, username, role)
//! - [`role`]: the single role gate used by every protected route

pub mod auth;
pub mod role;
