use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::lessons::controller::{
    complete_lesson, create_lesson, delete_lesson, get_lesson, get_lessons, update_lesson,
};
use crate::state::AppState;

pub fn init_lessons_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lessons).post(create_lesson))
        .route(
            "/{id}",
            get(get_lesson).put(update_lesson).delete(delete_lesson),
        )
        .route("/{id}/complete", post(complete_lesson))
}
