//! Published view of the timer after each tick or command

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TimerPhase, TimerState};
use crate::display::{self, BAR_WIDTH};

/// Point-in-time copy of the timer, pushed to readers after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: TimerPhase,
    pub enabled: bool,
    pub paused: bool,
    pub elapsed_seconds: u64,
    pub interval_seconds: u64,
    pub tick_seconds: u64,
    pub cycles_completed: u64,
    /// Elapsed time as `MM:SS`
    pub elapsed_display: String,
    pub progress_bar: String,
    pub last_reminder_at: Option<DateTime<Utc>>,
}

impl TimerSnapshot {
    pub fn capture(timer: &TimerState, last_reminder_at: Option<DateTime<Utc>>) -> Self {
        let (elapsed_display, progress_bar) =
            display::format(timer.elapsed_seconds(), timer.interval_seconds(), BAR_WIDTH);

        Self {
            phase: timer.phase(),
            enabled: timer.is_enabled(),
            paused: timer.is_paused(),
            elapsed_seconds: timer.elapsed_seconds(),
            interval_seconds: timer.interval_seconds(),
            tick_seconds: timer.tick_seconds(),
            cycles_completed: timer.cycles_completed(),
            elapsed_display,
            progress_bar,
            last_reminder_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerSettings;

    #[test]
    fn capture_renders_current_progress() {
        let mut timer = TimerState::new(TimerSettings::new(1200, 5));
        for _ in 0..120 {
            timer.tick();
        }
        timer.pause();

        let snapshot = TimerSnapshot::capture(&timer, None);
        assert_eq!(snapshot.phase, TimerPhase::Paused);
        assert!(snapshot.enabled && snapshot.paused);
        assert_eq!(snapshot.elapsed_seconds, 600);
        assert_eq!(snapshot.elapsed_display, "10:00");
        assert_eq!(snapshot.progress_bar, "█████░░░░░");
        assert_eq!(snapshot.cycles_completed, 0);
        assert!(snapshot.last_reminder_at.is_none());
    }
}
