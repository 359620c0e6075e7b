//! Shared utilities.
//!
//! - [`errors`]: Application error types and HTTP mapping
//! - [`extract`]: Request extractors whose rejections use the error envelope
//! - [`jwt`]: JWT token creation and verification
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod extract;
pub mod jwt;
pub mod password;
