//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::UiState;

/// Response envelope for the command endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: UiState,
}

impl CommandResponse {
    /// Wrap the post-command snapshot; `status` mirrors the timer state
    /// so clients can branch without digging into `timer`.
    pub fn new(message: String, timer: UiState) -> Self {
        Self {
            status: timer.timer_state.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Full status: snapshot, rendering helper and server metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: UiState,
    pub display: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_command: Option<String>,
    pub last_command_time: Option<DateTime<Utc>>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
