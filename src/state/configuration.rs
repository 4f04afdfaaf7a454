//! User-chosen countdown duration

use serde::{Deserialize, Serialize};

/// Upper bound for the minutes field; the display is two digits wide.
pub const MAX_MINUTES: u32 = 99;
/// Upper bound for the seconds field.
pub const MAX_SECONDS: u32 = 59;

/// The duration the user dialed in before starting the countdown.
///
/// Only editable while the engine is in the `Ready` state. All
/// adjustments clamp at the field bounds; nothing wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfiguration {
    pub minutes: u32,
    pub seconds: u32,
}

impl TimerConfiguration {
    /// Create a configuration, clamping out-of-range values into bounds.
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes: minutes.min(MAX_MINUTES),
            seconds: seconds.min(MAX_SECONDS),
        }
    }

    /// Total configured duration in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    pub fn increment_minutes(&mut self) {
        self.minutes = (self.minutes + 1).min(MAX_MINUTES);
    }

    pub fn decrement_minutes(&mut self) {
        self.minutes = self.minutes.saturating_sub(1);
    }

    pub fn increment_seconds(&mut self) {
        self.seconds = (self.seconds + 1).min(MAX_SECONDS);
    }

    pub fn decrement_seconds(&mut self) {
        self.seconds = self.seconds.saturating_sub(1);
    }
}

impl Default for TimerConfiguration {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
