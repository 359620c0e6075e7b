//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup and handed to [`crate::state::AppState`];
//! handlers receive it by dependency injection rather than through any
//! process-global. sqlx guarantees that concurrent first acquisitions share
//! the pool's connection attempts instead of racing to open their own.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// Initializes the connection pool and applies pending migrations.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset, the connection fails, or a
/// migration cannot be applied. All three are startup-fatal by design.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
