use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::classes::controller::{create_class, get_classes, grant_course_access};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_classes).post(create_class))
        .route("/{id}/courses", post(grant_course_access))
}
