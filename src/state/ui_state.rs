//! Snapshot published to observers after every engine mutation

use serde::{Deserialize, Serialize};

use super::TimerState;

/// Immutable view of the countdown, derived by the engine.
///
/// `minutes`/`seconds` hold the remaining time while running or paused,
/// and the configured duration while ready. `progress` is the elapsed
/// fraction of the originally configured duration: 0 when ready,
/// monotonically non-decreasing while running, frozen while paused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub minutes: u32,
    pub seconds: u32,
    pub timer_state: TimerState,
    pub progress: f32,
}

impl UiState {
    /// Zero-padded `MM:SS` rendering of the displayed time.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}
