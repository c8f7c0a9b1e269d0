//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    display::MenuView,
    state::{AppState, TimerCommand},
};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Forward a command to the reminder loop and report the resulting state
async fn run_command(
    state: &AppState,
    command: TimerCommand,
    message: &str,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.send_command(command).await {
        Ok(timer) => {
            info!("{} endpoint called - phase now {:?}", command.as_str(), timer.phase);
            Ok(Json(ApiResponse::new(command.as_str(), message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to apply {} command: {}", command.as_str(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /enable - Turn the timer on
pub async fn enable_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, TimerCommand::Enable, "Timer enabled").await
}

/// Handle POST /disable - Turn the timer off
pub async fn disable_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, TimerCommand::Disable, "Timer disabled").await
}

/// Handle POST /pause - Pause the timer (ignored while disabled)
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, TimerCommand::Pause, "Timer paused").await
}

/// Handle POST /resume - Resume a paused timer (ignored while disabled)
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, TimerCommand::Resume, "Timer resumed").await
}

/// Handle POST /reset - Zero elapsed time and cycle count
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, TimerCommand::Reset, "Timer and cycle count reset").await
}

/// Handle POST /toggle/enabled - Enable/Disable menu item
pub async fn toggle_enabled_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, TimerCommand::ToggleEnabled, "Timer enabled state toggled").await
}

/// Handle POST /toggle/paused - Pause/Resume menu item
pub async fn toggle_paused_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, TimerCommand::TogglePaused, "Timer paused state toggled").await
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.get_snapshot(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /menu - Return the status menu titles
pub async fn menu_handler(State(state): State<Arc<AppState>>) -> Json<MenuView> {
    Json(MenuView::from_snapshot(&state.get_snapshot()))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
