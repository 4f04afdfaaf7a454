//! HTTP endpoint handlers
//!
//! Each command handler forwards one engine command and returns the
//! post-command snapshot. Commands that are invalid for the current
//! state are no-ops in the engine, so every handler responds 200 with
//! whatever the countdown actually looks like afterwards.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use tracing::info;

use super::responses::{CommandResponse, HealthResponse, StatusResponse};
use crate::state::AppState;

/// Handle POST /start - begin the countdown from the configured duration
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<CommandResponse> {
    state.record_command("start");
    let timer = state.engine.start_timer().await;
    info!("Start requested, timer is now {}", timer.timer_state);
    Json(CommandResponse::new("Start requested".to_string(), timer))
}

/// Handle POST /pause - freeze a running countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<CommandResponse> {
    state.record_command("pause");
    let timer = state.engine.pause_timer().await;
    info!("Pause requested, timer is now {}", timer.timer_state);
    Json(CommandResponse::new("Pause requested".to_string(), timer))
}

/// Handle POST /resume - continue a paused countdown
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Json<CommandResponse> {
    state.record_command("resume");
    let timer = state.engine.resume_timer().await;
    info!("Resume requested, timer is now {}", timer.timer_state);
    Json(CommandResponse::new("Resume requested".to_string(), timer))
}

/// Handle POST /reset - return a paused countdown to the configured duration
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<CommandResponse> {
    state.record_command("reset");
    let timer = state.engine.reset_timer().await;
    info!("Reset requested, timer is now {}", timer.timer_state);
    Json(CommandResponse::new("Reset requested".to_string(), timer))
}

/// Handle POST /minutes/increment
pub async fn minutes_increment_handler(
    State(state): State<Arc<AppState>>,
) -> Json<CommandResponse> {
    state.record_command("increment-minutes");
    let timer = state.engine.increment_minutes().await;
    Json(CommandResponse::new(
        format!("Configured duration is {}", timer.display()),
        timer,
    ))
}

/// Handle POST /minutes/decrement
pub async fn minutes_decrement_handler(
    State(state): State<Arc<AppState>>,
) -> Json<CommandResponse> {
    state.record_command("decrement-minutes");
    let timer = state.engine.decrement_minutes().await;
    Json(CommandResponse::new(
        format!("Configured duration is {}", timer.display()),
        timer,
    ))
}

/// Handle POST /seconds/increment
pub async fn seconds_increment_handler(
    State(state): State<Arc<AppState>>,
) -> Json<CommandResponse> {
    state.record_command("increment-seconds");
    let timer = state.engine.increment_seconds().await;
    Json(CommandResponse::new(
        format!("Configured duration is {}", timer.display()),
        timer,
    ))
}

/// Handle POST /seconds/decrement
pub async fn seconds_decrement_handler(
    State(state): State<Arc<AppState>>,
) -> Json<CommandResponse> {
    state.record_command("decrement-seconds");
    let timer = state.engine.decrement_seconds().await;
    Json(CommandResponse::new(
        format!("Configured duration is {}", timer.display()),
        timer,
    ))
}

/// Handle GET /status - current snapshot plus server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.snapshot();
    let display = timer.display();
    let (last_command, last_command_time) = match state.last_command() {
        Some((name, time)) => (Some(name), Some(time)),
        None => (None, None),
    };

    Json(StatusResponse {
        timer,
        display,
        uptime: state.uptime(),
        port: state.port,
        host: state.host.clone(),
        last_command,
        last_command_time,
    })
}

/// Handle GET /health - health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
