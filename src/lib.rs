//! Posture Check - A background timer that reminds you to check your posture
//!
//! This library provides the interval timer, its text rendering for a status
//! menu, desktop notification dispatch and a small local control API.

pub mod config;
pub mod state;
pub mod display;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
