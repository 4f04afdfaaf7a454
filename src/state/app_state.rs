//! Shared state behind the HTTP control surface

use std::{
    sync::Mutex,
    time::Instant,
};

use chrono::{DateTime, Utc};

use super::{TimerConfiguration, UiState};
use crate::tasks::EngineHandle;

/// Everything the HTTP handlers need: the engine handle plus server
/// metadata and last-command tracking for the status endpoint.
#[derive(Debug)]
pub struct AppState {
    pub engine: EngineHandle,
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    last_command: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create the shared state, spawning the countdown task for the
    /// initial configuration.
    pub fn new(host: String, port: u16, config: TimerConfiguration) -> Self {
        Self {
            engine: EngineHandle::spawn(config),
            start_time: Instant::now(),
            port,
            host,
            last_command: Mutex::new(None),
        }
    }

    /// Latest published countdown snapshot.
    pub fn snapshot(&self) -> UiState {
        self.engine.current()
    }

    /// Remember the most recent command for the status endpoint.
    pub fn record_command(&self, name: &str) {
        if let Ok(mut last) = self.last_command.lock() {
            *last = Some((name.to_string(), Utc::now()));
        }
    }

    pub fn last_command(&self) -> Option<(String, DateTime<Utc>)> {
        self.last_command.lock().ok().and_then(|last| last.clone())
    }

    /// Server uptime as a compact human-readable string.
    pub fn uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
