//! Process utilities
//!
//! Signal handling used by the binary to stop cleanly.

pub mod signals;

pub use signals::shutdown_signal;
