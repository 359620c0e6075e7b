use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::users::model::Role;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleRequestResponse {
    pub success: bool,
    pub role: Role,
    /// True when the caller was already `pending-author` and no state
    /// change happened.
    pub already_pending: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleApprovalResponse {
    pub success: bool,
    pub user_id: Uuid,
    pub role: Role,
}
