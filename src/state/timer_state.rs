//! Timer state structure and management

use serde::{Deserialize, Serialize};

/// Timing constants read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Seconds of active time between reminders (must be positive)
    pub interval_seconds: u64,
    /// Seconds added to the elapsed counter per tick (must be positive)
    pub tick_seconds: u64,
}

impl TimerSettings {
    pub fn new(interval_seconds: u64, tick_seconds: u64) -> Self {
        Self {
            interval_seconds,
            tick_seconds,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::new(20 * 60, 5)
    }
}

/// The three externally visible states of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Disabled,
    Running,
    Paused,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Disabled or paused, nothing changed
    Idle,
    /// Elapsed time advanced without reaching the interval
    Advanced,
    /// The interval elapsed this many times; one reminder is due per cycle
    CycleCompleted(u64),
}

/// Interval timer tracking active time since the last reminder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    settings: TimerSettings,
    elapsed_seconds: u64,
    enabled: bool,
    paused: bool,
    cycles_completed: u64,
}

impl TimerState {
    /// Create a running timer with zeroed counters
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            elapsed_seconds: 0,
            enabled: true,
            paused: false,
            cycles_completed: 0,
        }
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn interval_seconds(&self) -> u64 {
        self.settings.interval_seconds
    }

    pub fn tick_seconds(&self) -> u64 {
        self.settings.tick_seconds
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    pub fn phase(&self) -> TimerPhase {
        match (self.enabled, self.paused) {
            (false, _) => TimerPhase::Disabled,
            (true, true) => TimerPhase::Paused,
            (true, false) => TimerPhase::Running,
        }
    }

    /// Check if ticks currently advance the elapsed counter
    pub fn is_running(&self) -> bool {
        self.phase() == TimerPhase::Running
    }

    /// Switch between disabled and the last active enabled state
    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Switch between running and paused; no-op while disabled
    pub fn toggle_paused(&mut self) {
        if self.enabled {
            self.paused = !self.paused;
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn pause(&mut self) {
        if self.enabled {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        if self.enabled {
            self.paused = false;
        }
    }

    /// Zero both counters, leaving the enabled and paused flags alone
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.cycles_completed = 0;
    }

    /// Advance by one tick, carrying any overshoot into the next cycle
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        let interval = self.settings.interval_seconds;
        self.elapsed_seconds += self.settings.tick_seconds;

        if self.elapsed_seconds < interval {
            return TickOutcome::Advanced;
        }

        // A tick longer than the interval can wrap more than once.
        let wraps = self.elapsed_seconds / interval;
        self.cycles_completed += wraps;
        self.elapsed_seconds %= interval;
        TickOutcome::CycleCompleted(wraps)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}
