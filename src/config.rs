//! Configuration and CLI argument handling

use clap::{Parser, Subcommand};

use crate::state::{timer_state::DEFAULT_ALLOWED_SECONDS, DisplayFormat};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-kit")]
#[command(about = "A cancellable countdown timer and a Fisher-Yates shuffle")]
#[command(version)]
pub struct Config {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a countdown, printing each state change as a JSON line
    Run {
        /// Countdown allowance in seconds
        #[arg(short, long, default_value_t = DEFAULT_ALLOWED_SECONDS)]
        allowed: u64,

        /// Render seconds with a leading zero ("2:05" instead of "2:5")
        #[arg(long)]
        padded: bool,

        /// Render the initial display once and exit without counting down
        #[arg(long)]
        init_only: bool,
    },
    /// Print the given items in random order, one per line
    Shuffle {
        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,

        items: Vec<String>,
    },
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Library-level countdown settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub allowed_seconds: u64,
    pub format: DisplayFormat,
}

impl TimerConfig {
    /// Settings for the given allowance with compact display
    pub fn new(allowed_seconds: u64) -> Self {
        Self {
            allowed_seconds,
            format: DisplayFormat::default(),
        }
    }

    /// Use the given display format
    pub fn with_format(mut self, format: DisplayFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_SECONDS)
    }
}
