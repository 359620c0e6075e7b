//! Feature modules. Each follows the same structure:
//!
//! - `model.rs`: entities, DTOs, pure domain rules
//! - `service.rs`: business logic against the database
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: axum router configuration

pub mod admin;
pub mod audit;
pub mod auth;
pub mod classes;
pub mod courses;
pub mod lessons;
pub mod messages;
pub mod roles;
pub mod users;
