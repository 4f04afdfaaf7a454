//! Countdown state machine states

use serde::{Deserialize, Serialize};

/// The three states the countdown cycles through.
///
/// ```text
/// Ready --start--> Running --pause--> Pause --resume--> Running
/// Running --(remaining == 0)--> Ready
/// Pause --reset--> Ready
/// ```
///
/// Reaching zero collapses back to `Ready` (an implicit reset); there is
/// no distinct finished state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Idle; the configured duration is editable.
    Ready,
    /// Counting down, one tick per second.
    Running,
    /// Frozen mid-countdown; resumable or resettable.
    Pause,
}

impl TimerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Ready => "ready",
            TimerState::Running => "running",
            TimerState::Pause => "pause",
        }
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
