use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{AuditLog, effective_retention_days};

pub struct AuditService;

impl AuditService {
    /// Appends an audit entry. Failures are logged and swallowed so a
    /// broken audit trail never fails the originating request.
    pub async fn record(
        db: &PgPool,
        action: &str,
        user_id: Option<Uuid>,
        target_type: Option<&str>,
        target_id: Option<Uuid>,
        course_id: Option<Uuid>,
        metadata: serde_json::Value,
    ) {
        let result = sqlx::query(
            "INSERT INTO audit_logs (action, user_id, target_type, target_id, course_id, metadata)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(action)
        .bind(user_id)
        .bind(target_type)
        .bind(target_id)
        .bind(course_id)
        .bind(metadata)
        .execute(db)
        .await;

        if let Err(e) = result {
            tracing::warn!(action, error = %e, "failed to write audit entry");
        }
    }

    pub async fn list_recent(db: &PgPool) -> Result<Vec<AuditLog>, AppError> {
        let entries = sqlx::query_as::<_, AuditLog>(
            "SELECT * FROM audit_logs ORDER BY created_at DESC LIMIT 100",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(entries)
    }

    /// Deletes every entry strictly older than now minus the effective
    /// day threshold. Destructive and irreversible; the clamp inside
    /// [`effective_retention_days`] is the only safety net.
    #[instrument(skip(db))]
    pub async fn cleanup(db: &PgPool, days_input: Option<i64>) -> Result<(u64, i64), AppError> {
        let days = effective_retention_days(days_input);
        let cutoff = Utc::now() - Duration::days(days);

        let result = sqlx::query("DELETE FROM audit_logs WHERE created_at < $1")
            .bind(cutoff)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        let deleted = result.rows_affected();
        tracing::info!(deleted, days, "audit log cleanup completed");

        Ok((deleted, days))
    }
}
