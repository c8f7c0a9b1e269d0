//! External service integration module
//!
//! This module contains the notification dispatcher used to deliver
//! posture reminders.

pub mod notifier;

// Re-export main types
pub use notifier::{default_backend, dispatch, NotificationBackend, ReminderEvent};
