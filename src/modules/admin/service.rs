use rand::Rng;
use rand::distributions::Alphanumeric;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{Role, SEED_USERNAME};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::is_wipeable_collection;

pub struct AdminService;

impl AdminService {
    /// Idempotent upsert of the distinguished seed author account.
    ///
    /// Every invocation rewrites the password hash (repeated calls
    /// re-issue credentials) and forces the role back to `author` if it
    /// has drifted.
    #[instrument(skip(db, password))]
    pub async fn seed_author(
        db: &PgPool,
        password: Option<&str>,
    ) -> Result<(Uuid, bool, Option<String>), AppError> {
        let (plain, generated) = match password {
            Some(p) if !p.is_empty() => (p.to_string(), None),
            _ => {
                let random: String = rand::thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(16)
                    .map(char::from)
                    .collect();
                (random.clone(), Some(random))
            }
        };

        let password_hash = hash_password(&plain)?;

        #[derive(sqlx::FromRow)]
        struct Upserted {
            id: Uuid,
            created: bool,
        }

        let row = sqlx::query_as::<_, Upserted>(
            "INSERT INTO users (username, name, password_hash, role)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (username) DO UPDATE
             SET password_hash = EXCLUDED.password_hash,
                 role = EXCLUDED.role,
                 updated_at = now()
             RETURNING id, (xmax = 0) AS created",
        )
        .bind(SEED_USERNAME)
        .bind("Seed Author")
        .bind(&password_hash)
        .bind(Role::Author)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        tracing::info!(username = SEED_USERNAME, created = row.created, "seed author bootstrapped");

        Ok((row.id, row.created, generated))
    }

    /// One-shot normalization pass over lesson records: coerces legacy
    /// null content to an empty string and clamps negative positions.
    #[instrument(skip(db))]
    pub async fn migrate_lessons(db: &PgPool) -> Result<(u64, u64), AppError> {
        let content_fixed = sqlx::query("UPDATE lessons SET content = '' WHERE content IS NULL")
            .execute(db)
            .await
            .map_err(AppError::database)?
            .rows_affected();

        let positions_fixed = sqlx::query("UPDATE lessons SET position = 0 WHERE position < 0")
            .execute(db)
            .await
            .map_err(AppError::database)?
            .rows_affected();

        Ok((content_fixed, positions_fixed))
    }

    /// Full table wipe for an allow-listed collection name.
    #[instrument(skip(db))]
    pub async fn wipe_collection(db: &PgPool, collection: &str) -> Result<u64, AppError> {
        if !is_wipeable_collection(collection) {
            return Err(AppError::not_found(format!(
                "Unknown collection: {collection}"
            )));
        }

        // The name comes from the allow-list, never from raw input.
        let result = sqlx::query(&format!("DELETE FROM {collection}"))
            .execute(db)
            .await
            .map_err(AppError::database)?;

        let deleted = result.rows_affected();
        tracing::warn!(collection, deleted, "collection wiped");

        Ok(deleted)
    }

    /// Per-table document counts.
    pub async fn status(db: &PgPool) -> Result<BTreeMap<String, i64>, AppError> {
        let tables = [
            "users",
            "courses",
            "lessons",
            "classes",
            "class_course_access",
            "messages",
            "audit_logs",
        ];

        let mut counts = BTreeMap::new();
        for table in tables {
            let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(db)
                .await
                .map_err(AppError::database)?;
            counts.insert(table.to_string(), count);
        }

        Ok(counts)
    }
}
