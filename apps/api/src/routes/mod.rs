pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/interviews/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/interviews",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route(
            "/api/v1/interviews/:id",
            get(handlers::handle_get)
                .put(handlers::handle_update)
                .delete(handlers::handle_delete),
        )
        .with_state(state)
}
