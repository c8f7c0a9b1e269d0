//! Desktop notification dispatch for posture reminders

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::display::format_time;

const APP_NAME: &str = "posture-check";
const REMINDER_TITLE: &str = "Check your posture";

/// Platform default alert sound
#[cfg(target_os = "macos")]
const REMINDER_SOUND: &str = "default";
#[cfg(not(target_os = "macos"))]
const REMINDER_SOUND: &str = "message-new-instant";

/// Emitted once per completed interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEvent {
    /// Cycle count after the completed interval
    pub cycle: u64,
    pub interval_seconds: u64,
    pub fired_at: DateTime<Utc>,
}

impl ReminderEvent {
    pub fn new(cycle: u64, interval_seconds: u64) -> Self {
        Self {
            cycle,
            interval_seconds,
            fired_at: Utc::now(),
        }
    }

    pub fn title(&self) -> &'static str {
        REMINDER_TITLE
    }

    pub fn sound(&self) -> &'static str {
        REMINDER_SOUND
    }

    pub fn body(&self) -> String {
        format!("{} elapsed", format_time(self.interval_seconds))
    }
}

/// Something that can show a reminder to the user
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    async fn remind(&self, event: &ReminderEvent) -> Result<(), String>;
}

/// Shows reminders through the desktop notification service
#[derive(Debug, Default)]
pub struct DesktopNotifier;

#[async_trait]
impl NotificationBackend for DesktopNotifier {
    async fn remind(&self, event: &ReminderEvent) -> Result<(), String> {
        debug!(cycle = event.cycle, "remind: building notification");
        let summary = event.title().to_string();
        let body = event.body();
        let sound = event.sound();

        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(APP_NAME)
                .summary(&summary)
                .body(&body)
                .sound_name(sound)
                .show()
                .map(|_| ())
                .map_err(|e| format!("Failed to show notification: {}", e))
        })
        .await
        .map_err(|e| format!("Notification task failed: {}", e))?
    }
}

/// Writes reminders to the log only
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationBackend for LogNotifier {
    async fn remind(&self, event: &ReminderEvent) -> Result<(), String> {
        info!("[REMINDER] {} - {} (cycle {})", event.title(), event.body(), event.cycle);
        Ok(())
    }
}

/// Factory for the configured backend
pub fn default_backend(desktop: bool) -> Arc<dyn NotificationBackend> {
    if desktop {
        Arc::new(DesktopNotifier)
    } else {
        Arc::new(LogNotifier)
    }
}

/// Fire-and-forget delivery; failures are logged and never reach the caller
pub fn dispatch(backend: Arc<dyn NotificationBackend>, event: ReminderEvent) {
    tokio::spawn(async move {
        match backend.remind(&event).await {
            Ok(()) => debug!(cycle = event.cycle, "reminder delivered"),
            Err(e) => warn!(error = %e, cycle = event.cycle, "reminder dropped"),
        }
    });
}
