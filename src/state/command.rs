//! Commands issued by the menu controller

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use super::{TimerSnapshot, TimerState};

/// A user command applied to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerCommand {
    Enable,
    Disable,
    Pause,
    Resume,
    Reset,
    ToggleEnabled,
    TogglePaused,
}

impl TimerCommand {
    /// Apply the command; invalid combinations are no-ops
    pub fn apply(self, timer: &mut TimerState) {
        match self {
            TimerCommand::Enable => timer.enable(),
            TimerCommand::Disable => timer.disable(),
            TimerCommand::Pause => timer.pause(),
            TimerCommand::Resume => timer.resume(),
            TimerCommand::Reset => timer.reset(),
            TimerCommand::ToggleEnabled => timer.toggle_enabled(),
            TimerCommand::TogglePaused => timer.toggle_paused(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimerCommand::Enable => "enable",
            TimerCommand::Disable => "disable",
            TimerCommand::Pause => "pause",
            TimerCommand::Resume => "resume",
            TimerCommand::Reset => "reset",
            TimerCommand::ToggleEnabled => "toggle-enabled",
            TimerCommand::TogglePaused => "toggle-paused",
        }
    }
}

/// A command in flight to the reminder loop, with a channel for the resulting snapshot
#[derive(Debug)]
pub struct CommandRequest {
    pub command: TimerCommand,
    pub reply: oneshot::Sender<TimerSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{TimerPhase, TimerSettings};

    #[test]
    fn commands_map_to_transitions() {
        let mut timer = TimerState::new(TimerSettings::new(60, 5));
        TimerCommand::Pause.apply(&mut timer);
        assert_eq!(timer.phase(), TimerPhase::Paused);
        TimerCommand::ToggleEnabled.apply(&mut timer);
        assert_eq!(timer.phase(), TimerPhase::Disabled);
        TimerCommand::TogglePaused.apply(&mut timer);
        TimerCommand::Resume.apply(&mut timer);
        TimerCommand::Enable.apply(&mut timer);
        assert_eq!(timer.phase(), TimerPhase::Paused);
        TimerCommand::TogglePaused.apply(&mut timer);
        assert_eq!(timer.phase(), TimerPhase::Running);

        timer.tick();
        TimerCommand::Reset.apply(&mut timer);
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&TimerCommand::ToggleEnabled).unwrap();
        assert_eq!(json, "\"toggle-enabled\"");
        assert_eq!(TimerCommand::ToggleEnabled.as_str(), "toggle-enabled");
    }
}
