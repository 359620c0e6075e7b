use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::admin::controller::{migrate_lessons, seed_author, status, wipe_collection};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/seed-author", post(seed_author))
        .route("/migrate-lessons", post(migrate_lessons))
        .route("/wipe/{collection}", delete(wipe_collection))
        .route("/status", get(status))
}
