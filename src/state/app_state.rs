//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::info;

use super::{CommandRequest, TimerCommand, TimerSettings, TimerSnapshot, TimerState};

/// Capacity of the command queue into the reminder loop
const COMMAND_QUEUE_SIZE: usize = 32;

/// Channel ends owned by the reminder loop
#[derive(Debug)]
pub struct TimerChannels {
    pub commands: mpsc::Receiver<CommandRequest>,
    pub snapshots: watch::Sender<TimerSnapshot>,
}

/// Shared handle to the reminder loop, used by the API handlers.
///
/// The timer itself is owned by the loop task; this only carries the
/// channels into it and server metadata.
#[derive(Debug)]
pub struct AppState {
    /// Queue of commands into the reminder loop
    pub command_tx: mpsc::Sender<CommandRequest>,
    /// Latest published timer snapshot
    pub snapshot_rx: watch::Receiver<TimerSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create the shared state and the channel ends for the reminder loop
    pub fn new(settings: TimerSettings, port: u16, host: String) -> (Self, TimerChannels) {
        let (command_tx, commands) = mpsc::channel(COMMAND_QUEUE_SIZE);
        let initial = TimerSnapshot::capture(&TimerState::new(settings), None);
        let (snapshots, snapshot_rx) = watch::channel(initial);

        let state = Self {
            command_tx,
            snapshot_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        };

        (state, TimerChannels { commands, snapshots })
    }

    /// Send a command to the reminder loop and wait for the resulting snapshot
    pub async fn send_command(&self, command: TimerCommand) -> Result<TimerSnapshot, String> {
        info!("Sending command: {}", command.as_str());

        let (reply, response) = oneshot::channel();
        self.command_tx
            .send(CommandRequest { command, reply })
            .await
            .map_err(|e| format!("Reminder loop is not running: {}", e))?;

        let snapshot = response
            .await
            .map_err(|e| format!("Reminder loop dropped command reply: {}", e))?;

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(command.as_str().to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(snapshot)
    }

    /// Get the most recently published timer snapshot
    pub fn get_snapshot(&self) -> TimerSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerPhase;

    #[tokio::test]
    async fn starts_with_running_snapshot() {
        let (state, _channels) = AppState::new(TimerSettings::new(600, 5), 0, "127.0.0.1".into());
        let snapshot = state.get_snapshot();
        assert_eq!(snapshot.phase, TimerPhase::Running);
        assert_eq!(snapshot.interval_seconds, 600);
        assert_eq!(state.get_last_action(), (None, None));
    }

    #[tokio::test]
    async fn send_command_fails_without_loop() {
        let (state, channels) = AppState::new(TimerSettings::default(), 0, "127.0.0.1".into());
        drop(channels);
        assert!(state.send_command(TimerCommand::Pause).await.is_err());
        assert_eq!(state.get_last_action().0, None);
    }

    #[tokio::test]
    async fn records_last_action_after_reply() {
        let (state, mut channels) = AppState::new(TimerSettings::default(), 0, "127.0.0.1".into());
        let responder = tokio::spawn(async move {
            let request = channels.commands.recv().await.unwrap();
            let mut timer = TimerState::default();
            request.command.apply(&mut timer);
            let _ = request.reply.send(TimerSnapshot::capture(&timer, None));
        });

        let snapshot = state.send_command(TimerCommand::Disable).await.unwrap();
        responder.await.unwrap();
        assert_eq!(snapshot.phase, TimerPhase::Disabled);
        assert_eq!(state.get_last_action().0.as_deref(), Some("disable"));
        assert!(state.get_last_action().1.is_some());
    }

    #[test]
    fn uptime_is_human_readable() {
        let (state, _channels) = AppState::new(TimerSettings::default(), 0, "127.0.0.1".into());
        assert!(state.get_uptime().ends_with('s'));
    }
}
