pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/avaliar", post(handlers::handle_extract))
        .route(
            "/api/v1/evaluations/extract",
            post(handlers::handle_extract),
        )
        .with_state(state)
}
