//! State management module
//!
//! This module contains the interval timer, the commands that drive it and
//! the shared handle the API uses to reach it.

pub mod app_state;
pub mod command;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, TimerChannels};
pub use command::{CommandRequest, TimerCommand};
pub use snapshot::TimerSnapshot;
pub use timer_state::{TickOutcome, TimerPhase, TimerSettings, TimerState};
