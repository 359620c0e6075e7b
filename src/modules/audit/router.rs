use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::audit::controller::{cleanup_audit, list_audit};
use crate::state::AppState;

pub fn init_audit_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_audit))
        .route("/cleanup", delete(cleanup_audit))
}
