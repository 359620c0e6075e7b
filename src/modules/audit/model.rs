use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Day threshold bounds for the retention purge. The clamp prevents an
/// accidental "delete everything" via a zero, negative or huge value.
pub const MIN_RETENTION_DAYS: i64 = 1;
pub const MAX_RETENTION_DAYS: i64 = 365;
pub const DEFAULT_RETENTION_DAYS: i64 = 90;

/// Effective day threshold for a cleanup request.
///
/// Absent or non-numeric input falls back to the default; everything
/// is clamped to `[1, 365]`.
pub fn effective_retention_days(input: Option<i64>) -> i64 {
    input
        .unwrap_or(DEFAULT_RETENTION_DAYS)
        .clamp(MIN_RETENTION_DAYS, MAX_RETENTION_DAYS)
}

/// Append-only audit record. The only mutation path is the
/// time-bounded retention purge.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuditLog {
    pub id: Uuid,
    pub action: String,
    pub user_id: Option<Uuid>,
    pub target_type: Option<String>,
    pub target_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub metadata: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CleanupParams {
    /// Day threshold; clamped to [1, 365], default 90.
    pub days: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CleanupResponse {
    pub success: bool,
    pub deleted: u64,
    /// The effective day threshold actually used.
    pub days: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuditListResponse {
    pub success: bool,
    pub entries: Vec<AuditLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retention_days_clamps_low_values() {
        assert_eq!(effective_retention_days(Some(-5)), 1);
        assert_eq!(effective_retention_days(Some(0)), 1);
        assert_eq!(effective_retention_days(Some(1)), 1);
    }

    #[test]
    fn retention_days_clamps_high_values() {
        assert_eq!(effective_retention_days(Some(10000)), 365);
        assert_eq!(effective_retention_days(Some(365)), 365);
        assert_eq!(effective_retention_days(Some(366)), 365);
    }

    #[test]
    fn retention_days_defaults_when_absent() {
        assert_eq!(effective_retention_days(None), 90);
    }

    #[test]
    fn retention_days_passes_through_in_range() {
        assert_eq!(effective_retention_days(Some(30)), 30);
        assert_eq!(effective_retention_days(Some(180)), 180);
    }
}
