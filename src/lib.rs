//! Tickdown - a countdown timer engine behind an HTTP control surface
//!
//! The engine owns a minutes/seconds countdown with a
//! ready/running/pause state machine, publishes a snapshot on every
//! change, and is driven entirely by discrete commands.

pub mod api;
pub mod config;
pub mod engine;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use engine::TimerEngine;
pub use state::{AppState, TimerConfiguration, TimerState, UiState};
pub use tasks::EngineHandle;
pub use utils::signals::shutdown_signal;
