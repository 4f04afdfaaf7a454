//! HTTP control surface
//!
//! The presentation layer talks to the engine through this router: one
//! POST per command, a status endpoint for polling, and a health check.

pub mod handlers;
pub mod responses;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/resume", post(resume_handler))
        .route("/reset", post(reset_handler))
        .route("/minutes/increment", post(minutes_increment_handler))
        .route("/minutes/decrement", post(minutes_decrement_handler))
        .route("/seconds/increment", post(seconds_increment_handler))
        .route("/seconds/decrement", post(seconds_decrement_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
