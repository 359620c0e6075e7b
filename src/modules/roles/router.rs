use axum::{Router, middleware, routing::post};

use crate::middleware::role::require_admin;
use crate::modules::roles::controller::{approve_role, request_author};
use crate::state::AppState;

pub fn init_roles_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/request-author", post(request_author))
        .nest(
            "/approve",
            Router::new()
                .route("/{user_id}", post(approve_role))
                .route_layer(middleware::from_fn_with_state(state, require_admin)),
        )
}
