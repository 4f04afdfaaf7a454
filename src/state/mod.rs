//! State types
//!
//! The countdown's data model (configuration, state machine states,
//! published snapshots) and the shared state behind the HTTP surface.

pub mod app_state;
pub mod configuration;
pub mod timer_state;
pub mod ui_state;

pub use app_state::AppState;
pub use configuration::{TimerConfiguration, MAX_MINUTES, MAX_SECONDS};
pub use timer_state::TimerState;
pub use ui_state::UiState;
