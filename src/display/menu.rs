//! Status menu titles derived from a timer snapshot

use serde::{Deserialize, Serialize};

use crate::state::{TimerPhase, TimerSnapshot};

/// Title shown in the status bar itself
pub const STATUS_TITLE: &str = "posture";

/// Titles of every item in the status menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuView {
    pub status_title: String,
    pub timer_title: String,
    pub cycles_title: String,
    pub toggle_title: String,
    pub pause_title: String,
    /// The pause item is only offered while the timer is enabled
    pub pause_hidden: bool,
    pub reset_title: String,
    pub quit_title: String,
}

impl MenuView {
    pub fn from_snapshot(snapshot: &TimerSnapshot) -> Self {
        let timer_title = match snapshot.phase {
            TimerPhase::Disabled => "Timer Off".to_string(),
            TimerPhase::Paused => format!(
                "⏸ [{}] {} (paused)",
                snapshot.progress_bar, snapshot.elapsed_display
            ),
            TimerPhase::Running => {
                format!("⏱ [{}] {}", snapshot.progress_bar, snapshot.elapsed_display)
            }
        };

        let toggle_title = if snapshot.enabled { "Disable Timer" } else { "Enable Timer" };
        let pause_title = if snapshot.paused { "Resume Timer" } else { "Pause Timer" };

        Self {
            status_title: STATUS_TITLE.to_string(),
            timer_title,
            cycles_title: format!("Cycles completed: {}", snapshot.cycles_completed),
            toggle_title: toggle_title.to_string(),
            pause_title: pause_title.to_string(),
            pause_hidden: !snapshot.enabled,
            reset_title: "Reset Timer".to_string(),
            quit_title: "Quit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{TimerSettings, TimerState};

    fn view(timer: &TimerState) -> MenuView {
        MenuView::from_snapshot(&TimerSnapshot::capture(timer, None))
    }

    #[test]
    fn running_timer_shows_bar_and_time() {
        let mut timer = TimerState::new(TimerSettings::new(1200, 5));
        for _ in 0..60 {
            timer.tick();
        }
        let menu = view(&timer);
        assert_eq!(menu.status_title, "posture");
        assert_eq!(menu.timer_title, "⏱ [██░░░░░░░░] 05:00");
        assert_eq!(menu.cycles_title, "Cycles completed: 0");
        assert_eq!(menu.toggle_title, "Disable Timer");
        assert_eq!(menu.pause_title, "Pause Timer");
        assert!(!menu.pause_hidden);
    }

    #[test]
    fn paused_timer_is_marked() {
        let mut timer = TimerState::new(TimerSettings::new(1200, 5));
        timer.pause();
        let menu = view(&timer);
        assert_eq!(menu.timer_title, "⏸ [░░░░░░░░░░] 00:00 (paused)");
        assert_eq!(menu.pause_title, "Resume Timer");
    }

    #[test]
    fn disabled_timer_hides_pause_item() {
        let mut timer = TimerState::new(TimerSettings::new(10, 5));
        for _ in 0..5 {
            timer.tick();
        }
        timer.disable();
        let menu = view(&timer);
        assert_eq!(menu.timer_title, "Timer Off");
        assert_eq!(menu.cycles_title, "Cycles completed: 2");
        assert_eq!(menu.toggle_title, "Enable Timer");
        assert!(menu.pause_hidden);
    }
}
