//! Environment-driven configuration.
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token secret and expiry

pub mod cors;
pub mod database;
pub mod jwt;
