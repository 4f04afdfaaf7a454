//! Countdown engine state machine
//!
//! The engine is pure and synchronous: it owns the configured duration,
//! the remaining time and the current [`TimerState`], applies commands,
//! and derives [`UiState`] snapshots. It has no clock of its own; the
//! countdown task in [`crate::tasks`] delivers one [`tick`](TimerEngine::tick)
//! per wall-clock second while the engine is running.

pub mod command;

pub use command::Command;

use tracing::{debug, info};

use crate::state::{TimerConfiguration, TimerState, UiState};

/// Authoritative owner of the countdown state.
#[derive(Debug)]
pub struct TimerEngine {
    config: TimerConfiguration,
    state: TimerState,
    /// Configured total captured at start; basis for `progress`.
    total_seconds: u32,
    remaining_seconds: u32,
}

impl TimerEngine {
    pub fn new(config: TimerConfiguration) -> Self {
        Self {
            config,
            state: TimerState::Ready,
            total_seconds: 0,
            remaining_seconds: 0,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Derive the snapshot observers see.
    ///
    /// While ready the configured duration is shown and progress is zero;
    /// otherwise the remaining time and the elapsed fraction of the
    /// captured total.
    pub fn ui_state(&self) -> UiState {
        match self.state {
            TimerState::Ready => UiState {
                minutes: self.config.minutes,
                seconds: self.config.seconds,
                timer_state: self.state,
                progress: 0.0,
            },
            TimerState::Running | TimerState::Pause => UiState {
                minutes: self.remaining_seconds / 60,
                seconds: self.remaining_seconds % 60,
                timer_state: self.state,
                progress: 1.0 - self.remaining_seconds as f32 / self.total_seconds as f32,
            },
        }
    }

    /// Apply a command, ignoring it if invalid for the current state.
    pub fn apply(&mut self, command: Command) {
        match (self.state, command) {
            (TimerState::Ready, Command::IncrementMinutes) => self.config.increment_minutes(),
            (TimerState::Ready, Command::DecrementMinutes) => self.config.decrement_minutes(),
            (TimerState::Ready, Command::IncrementSeconds) => self.config.increment_seconds(),
            (TimerState::Ready, Command::DecrementSeconds) => self.config.decrement_seconds(),
            (TimerState::Ready, Command::Start) => self.start(),
            (TimerState::Running, Command::Pause) => {
                info!("Pausing countdown at {} seconds remaining", self.remaining_seconds);
                self.state = TimerState::Pause;
            }
            (TimerState::Pause, Command::Resume) => {
                info!("Resuming countdown at {} seconds remaining", self.remaining_seconds);
                self.state = TimerState::Running;
            }
            (TimerState::Pause, Command::Reset) => {
                info!("Resetting countdown to configured duration");
                self.clear_countdown();
            }
            (state, command) => {
                debug!("Ignoring command '{}' in state '{}'", command.as_str(), state);
            }
        }
    }

    /// Apply one 1-second decrement. Delivered only while running; a tick
    /// that races a state transition is dropped here as a safety net.
    pub fn tick(&mut self) {
        if self.state != TimerState::Running {
            debug!("Dropping tick received in state '{}'", self.state);
            return;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            // Finished: collapse back to Ready, there is no finished state.
            info!("Countdown finished, returning to ready");
            self.clear_countdown();
        }
    }

    fn start(&mut self) {
        let total = self.config.total_seconds();
        if total == 0 {
            debug!("Ignoring start with a zero configured duration");
            return;
        }

        info!(
            "Starting countdown: {:02}:{:02} ({} seconds)",
            self.config.minutes, self.config.seconds, total
        );
        self.total_seconds = total;
        self.remaining_seconds = total;
        self.state = TimerState::Running;
    }

    fn clear_countdown(&mut self) {
        self.state = TimerState::Ready;
        self.total_seconds = 0;
        self.remaining_seconds = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_engine(minutes: u32, seconds: u32) -> TimerEngine {
        let mut engine = TimerEngine::new(TimerConfiguration::new(minutes, seconds));
        engine.apply(Command::Start);
        assert_eq!(engine.state(), TimerState::Running);
        engine
    }

    #[test]
    fn adjustments_stay_within_bounds() {
        let mut engine = TimerEngine::new(TimerConfiguration::new(0, 0));

        engine.apply(Command::DecrementMinutes);
        engine.apply(Command::DecrementSeconds);
        let ui = engine.ui_state();
        assert_eq!((ui.minutes, ui.seconds), (0, 0));

        for _ in 0..200 {
            engine.apply(Command::IncrementMinutes);
            engine.apply(Command::IncrementSeconds);
        }
        let ui = engine.ui_state();
        assert_eq!((ui.minutes, ui.seconds), (99, 59));
    }

    #[test]
    fn start_with_zero_duration_is_ignored() {
        let mut engine = TimerEngine::new(TimerConfiguration::new(0, 0));
        engine.apply(Command::Start);
        assert_eq!(engine.state(), TimerState::Ready);
        assert_eq!(engine.ui_state().progress, 0.0);
    }

    #[test]
    fn countdown_runs_to_zero_and_returns_to_ready() {
        let mut engine = started_engine(0, 5);

        for expected in (1..5).rev() {
            engine.tick();
            let ui = engine.ui_state();
            assert_eq!(ui.timer_state, TimerState::Running);
            assert_eq!(ui.seconds, expected);
        }

        engine.tick();
        let ui = engine.ui_state();
        assert_eq!(ui.timer_state, TimerState::Ready);
        assert_eq!(ui.seconds, 5);
        assert_eq!(ui.progress, 0.0);
    }

    #[test]
    fn progress_is_monotonic_while_running() {
        let mut engine = started_engine(0, 10);
        let mut last = engine.ui_state().progress;
        assert_eq!(last, 0.0);

        for _ in 0..9 {
            engine.tick();
            let progress = engine.ui_state().progress;
            assert!(progress >= last);
            assert!(progress <= 1.0);
            last = progress;
        }
    }

    #[test]
    fn pause_freezes_and_resume_continues_exactly() {
        let mut engine = started_engine(0, 5);
        engine.tick();
        engine.tick();

        engine.apply(Command::Pause);
        assert_eq!(engine.state(), TimerState::Pause);
        let frozen = engine.ui_state();
        assert_eq!(frozen.seconds, 3);

        // Stray ticks must not advance a paused countdown.
        engine.tick();
        assert_eq!(engine.ui_state(), frozen);

        engine.apply(Command::Resume);
        assert_eq!(engine.state(), TimerState::Running);
        assert_eq!(engine.ui_state().seconds, 3);

        engine.tick();
        assert_eq!(engine.ui_state().seconds, 2);
    }

    #[test]
    fn reset_from_pause_restores_configured_duration() {
        let mut engine = started_engine(1, 30);
        for _ in 0..42 {
            engine.tick();
        }
        engine.apply(Command::Pause);

        engine.apply(Command::Reset);
        let ui = engine.ui_state();
        assert_eq!(ui.timer_state, TimerState::Ready);
        assert_eq!((ui.minutes, ui.seconds), (1, 30));
        assert_eq!(ui.progress, 0.0);
    }

    #[test]
    fn invalid_commands_leave_state_unchanged() {
        let mut engine = started_engine(0, 10);
        engine.tick();
        let before = engine.ui_state();

        engine.apply(Command::IncrementMinutes);
        engine.apply(Command::DecrementSeconds);
        engine.apply(Command::Start);
        engine.apply(Command::Resume);
        engine.apply(Command::Reset);
        assert_eq!(engine.ui_state(), before);

        engine.apply(Command::Pause);
        let paused = engine.ui_state();
        engine.apply(Command::Pause);
        engine.apply(Command::Start);
        engine.apply(Command::IncrementSeconds);
        assert_eq!(engine.ui_state(), paused);
    }

    #[test]
    fn duration_is_not_editable_outside_ready() {
        let mut engine = started_engine(0, 10);
        engine.apply(Command::Pause);
        engine.apply(Command::IncrementMinutes);
        engine.apply(Command::Reset);

        // Back in Ready with the original configuration intact.
        let ui = engine.ui_state();
        assert_eq!((ui.minutes, ui.seconds), (0, 10));
    }
}
