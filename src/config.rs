//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::TimerSettings;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "posture-check")]
#[command(about = "A background timer that reminds you to check your posture")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Reminder interval in minutes
    #[arg(short, long, default_value = "20", value_parser = clap::value_parser!(u64).range(1..=120))]
    pub interval: u64,

    /// Tick cadence in seconds (at most one hour)
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub tick: u64,

    /// Port to bind the control API to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Log reminders instead of showing desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn interval_seconds(&self) -> u64 {
        self.interval * 60
    }

    pub fn tick_seconds(&self) -> u64 {
        self.tick
    }

    /// Timing constants handed to the timer at startup
    pub fn timer_settings(&self) -> TimerSettings {
        TimerSettings::new(self.interval_seconds(), self.tick_seconds())
    }
}
