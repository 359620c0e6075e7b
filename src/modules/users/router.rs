use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::users::controller::{get_profile, reset_progress, update_profile};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/profile/reset-progress", post(reset_progress))
}
