use axum::{Router, routing::get};
use std::sync::Arc;

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod pages;
pub mod state;

use handlers::{generate_handler, health_handler, index_handler, metrics_handler};
use state::AppState;

// creating the router with routes
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/generate", get(generate_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
