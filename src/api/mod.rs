//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello_world))
        .route("/io_task", get(handlers::io_task))
        .route("/cpu_task", get(handlers::cpu_task))
        .route("/random_sleep", get(handlers::random_sleep))
        .route("/random_status", get(handlers::random_status))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
