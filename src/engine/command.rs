//! Discrete commands accepted by the countdown engine

/// Everything the presentation layer can ask the engine to do.
///
/// Validity is gated by the current [`TimerState`](crate::state::TimerState);
/// a command that is invalid for the current state is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ready only: bump configured minutes, clamped to 99.
    IncrementMinutes,
    /// Ready only: drop configured minutes, clamped to 0.
    DecrementMinutes,
    /// Ready only: bump configured seconds, clamped to 59.
    IncrementSeconds,
    /// Ready only: drop configured seconds, clamped to 0.
    DecrementSeconds,
    /// Ready only, with a non-zero configured duration: begin counting down.
    Start,
    /// Running only: freeze the countdown.
    Pause,
    /// Pause only: continue from the frozen remaining time.
    Resume,
    /// Pause only: return to Ready with the configured duration restored.
    Reset,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::IncrementMinutes => "increment-minutes",
            Command::DecrementMinutes => "decrement-minutes",
            Command::IncrementSeconds => "increment-seconds",
            Command::DecrementSeconds => "decrement-seconds",
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Reset => "reset",
        }
    }
}
