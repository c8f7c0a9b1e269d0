//! Presentation module
//!
//! Pure rendering of timer state into the text shown in the status menu.

pub mod menu;
pub mod progress;

// Re-export main types
pub use menu::MenuView;
pub use progress::{format, format_bar, format_time, BAR_WIDTH};
