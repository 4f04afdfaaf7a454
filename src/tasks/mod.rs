//! Background tasks
//!
//! The countdown task owns the engine and runs alongside the HTTP
//! server; handles talk to it over channels.

pub mod countdown;

pub use countdown::EngineHandle;
