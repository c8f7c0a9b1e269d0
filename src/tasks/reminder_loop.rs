//! Reminder loop background task

use std::{sync::Arc, time::Duration};
use chrono::{DateTime, Utc};
use tokio::{
    sync::watch,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    display::MenuView,
    services::{dispatch, NotificationBackend, ReminderEvent},
    state::{TickOutcome, TimerChannels, TimerCommand, TimerSettings, TimerSnapshot, TimerState},
};

/// Sole owner of the timer; ticks and commands are applied here one at a time
pub struct ReminderLoop {
    timer: TimerState,
    last_reminder_at: Option<DateTime<Utc>>,
    notifier: Arc<dyn NotificationBackend>,
    snapshots: watch::Sender<TimerSnapshot>,
}

impl ReminderLoop {
    pub fn new(
        settings: TimerSettings,
        notifier: Arc<dyn NotificationBackend>,
        snapshots: watch::Sender<TimerSnapshot>,
    ) -> Self {
        Self {
            timer: TimerState::new(settings),
            last_reminder_at: None,
            notifier,
            snapshots,
        }
    }

    /// Advance the timer one tick, dispatching one reminder per completed cycle
    pub fn handle_tick(&mut self) -> TimerSnapshot {
        match self.timer.tick() {
            TickOutcome::Idle => return self.timer_snapshot(),
            TickOutcome::Advanced => {}
            TickOutcome::CycleCompleted(wraps) => {
                let last = self.timer.cycles_completed();
                for cycle in (last + 1 - wraps)..=last {
                    let event = ReminderEvent::new(cycle, self.timer.interval_seconds());
                    info!("Interval complete, sending reminder (cycle {})", event.cycle);
                    self.last_reminder_at = Some(event.fired_at);
                    dispatch(Arc::clone(&self.notifier), event);
                }
            }
        }
        self.publish()
    }

    /// Apply a user command and publish the result
    pub fn handle_command(&mut self, command: TimerCommand) -> TimerSnapshot {
        command.apply(&mut self.timer);
        info!(
            "Applied command {}: phase={:?}, elapsed={}s, cycles={}",
            command.as_str(),
            self.timer.phase(),
            self.timer.elapsed_seconds(),
            self.timer.cycles_completed()
        );
        self.publish()
    }

    fn timer_snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::capture(&self.timer, self.last_reminder_at)
    }

    fn publish(&self) -> TimerSnapshot {
        let snapshot = self.timer_snapshot();
        debug!("{}", MenuView::from_snapshot(&snapshot).timer_title);
        // Readers may come and go; a send with no receivers is not an error here.
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }
}

/// Drive the reminder loop until every command sender is dropped
pub async fn reminder_loop_task(
    notifier: Arc<dyn NotificationBackend>,
    settings: TimerSettings,
    channels: TimerChannels,
) {
    let TimerChannels { mut commands, snapshots } = channels;
    let mut reminder = ReminderLoop::new(settings, notifier, snapshots);

    info!(
        "Starting reminder loop: interval={}s, tick={}s",
        settings.interval_seconds, settings.tick_seconds
    );

    let period = Duration::from_secs(settings.tick_seconds);
    let mut ticker = interval_at(Instant::now() + period, period);
    // Time spent asleep or suspended is not active time.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                reminder.handle_tick();
            }

            request = commands.recv() => {
                let Some(request) = request else {
                    info!("Command channel closed, stopping reminder loop");
                    break;
                };
                let snapshot = reminder.handle_command(request.command);
                if request.reply.send(snapshot).is_err() {
                    debug!("Command sender went away before reply");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::sync::Notify;

    use crate::state::{AppState, TimerPhase};

    struct Failing {
        attempts: AtomicU64,
        done: Notify,
    }

    #[async_trait]
    impl NotificationBackend for Failing {
        async fn remind(&self, _event: &ReminderEvent) -> Result<(), String> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            self.done.notify_one();
            Err("permission denied".to_string())
        }
    }

    fn failing() -> Arc<Failing> {
        Arc::new(Failing {
            attempts: AtomicU64::new(0),
            done: Notify::new(),
        })
    }

    #[tokio::test]
    async fn failed_notification_does_not_stall_timer() {
        let notifier = failing();
        let (tx, rx) = watch::channel(TimerSnapshot::capture(&TimerState::default(), None));
        let mut reminder = ReminderLoop::new(TimerSettings::new(10, 5), notifier.clone(), tx);

        reminder.handle_tick();
        let snapshot = reminder.handle_tick();
        assert_eq!(snapshot.cycles_completed, 1);
        assert!(snapshot.last_reminder_at.is_some());

        notifier.done.notified().await;
        assert_eq!(notifier.attempts.load(Ordering::SeqCst), 1);

        let snapshot = reminder.handle_tick();
        assert_eq!(snapshot.elapsed_seconds, 5);
        assert_eq!(*rx.borrow(), snapshot);
    }

    #[tokio::test]
    async fn oversized_tick_sends_a_reminder_per_cycle() {
        let notifier = failing();
        let (tx, _rx) = watch::channel(TimerSnapshot::capture(&TimerState::default(), None));
        let mut reminder = ReminderLoop::new(TimerSettings::new(60, 150), notifier.clone(), tx);

        let snapshot = reminder.handle_tick();
        assert_eq!(snapshot.cycles_completed, 2);
        assert_eq!(snapshot.elapsed_seconds, 30);

        // Let every spawned delivery run.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(notifier.attempts.load(Ordering::SeqCst), snapshot.cycles_completed);
    }

    #[tokio::test]
    async fn paused_ticks_publish_nothing_new() {
        let notifier = failing();
        let (tx, rx) = watch::channel(TimerSnapshot::capture(&TimerState::default(), None));
        let mut reminder = ReminderLoop::new(TimerSettings::new(1200, 5), notifier.clone(), tx);

        for _ in 0..100 {
            reminder.handle_tick();
        }
        reminder.handle_command(TimerCommand::Pause);
        for _ in 0..50 {
            reminder.handle_tick();
        }

        let published = rx.borrow().clone();
        assert_eq!(published.phase, TimerPhase::Paused);
        assert_eq!(published.elapsed_seconds, 500);
        assert_eq!(published.cycles_completed, 0);
        assert_eq!(notifier.attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn task_serves_commands_until_senders_drop() {
        let settings = TimerSettings::new(1200, 5);
        let (state, channels) = AppState::new(settings, 0, "127.0.0.1".into());
        let task = tokio::spawn(reminder_loop_task(failing(), settings, channels));

        let snapshot = state.send_command(TimerCommand::TogglePaused).await.unwrap();
        assert_eq!(snapshot.phase, TimerPhase::Paused);
        assert_eq!(state.get_snapshot().phase, TimerPhase::Paused);

        let snapshot = state.send_command(TimerCommand::Disable).await.unwrap();
        assert_eq!(snapshot.phase, TimerPhase::Disabled);
        let snapshot = state.send_command(TimerCommand::TogglePaused).await.unwrap();
        assert!(snapshot.paused);

        drop(state);
        task.await.unwrap();
    }
}
