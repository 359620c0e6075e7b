use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::messages::controller::{get_thread, hide_message, send_message};
use crate::state::AppState;

pub fn init_messages_router() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/thread", get(get_thread))
        .route("/{id}/hide", post(hide_message))
}
