//! Background tasks module
//!
//! This module contains the reminder loop that runs alongside the control API.

pub mod reminder_loop;

// Re-export main functions
pub use reminder_loop::{reminder_loop_task, ReminderLoop};
