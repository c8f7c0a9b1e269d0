//! HTTP API module
//!
//! This module contains the menu controller endpoints and response structures.

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
        .route("/enable", post(enable_handler))
        .route("/disable", post(disable_handler))
        .route("/pause", post(pause_handler))
        .route("/resume", post(resume_handler))
        .route("/reset", post(reset_handler))
        // Menu toggle items
        .route("/toggle/enabled", post(toggle_enabled_handler))
        .route("/toggle/paused", post(toggle_paused_handler))
        .route("/status", get(status_handler))
        .route("/menu", get(menu_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
