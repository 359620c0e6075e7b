use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// Tables the wipe endpoint may target. Deliberately an allow-list so
/// the destructive surface stays narrow; user accounts are never
/// wipeable.
pub const WIPEABLE_COLLECTIONS: [&str; 4] = ["lessons", "courses", "messages", "audit_logs"];

pub fn is_wipeable_collection(name: &str) -> bool {
    WIPEABLE_COLLECTIONS.contains(&name)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SeedAuthorDto {
    /// Password for the seed account; a random one is generated and
    /// returned when absent.
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedAuthorResponse {
    pub success: bool,
    pub id: Uuid,
    pub username: String,
    pub created: bool,
    /// Only present when the password was generated server-side; it is
    /// not retrievable later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MigrateLessonsResponse {
    pub success: bool,
    /// Rows with legacy null content that were normalized.
    pub content_fixed: u64,
    /// Rows with out-of-range positions that were clamped.
    pub positions_fixed: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WipeResponse {
    pub success: bool,
    pub collection: String,
    pub deleted: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub counts: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_allow_list_excludes_users() {
        assert!(is_wipeable_collection("lessons"));
        assert!(is_wipeable_collection("courses"));
        assert!(is_wipeable_collection("messages"));
        assert!(is_wipeable_collection("audit_logs"));
        assert!(!is_wipeable_collection("users"));
        assert!(!is_wipeable_collection("classes"));
        assert!(!is_wipeable_collection("anything; DROP TABLE users"));
    }
}
