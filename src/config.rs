//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::TimerConfiguration;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "tickdown")]
#[command(about = "A state-managed countdown timer engine with an HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20870")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Initial countdown minutes (clamped to 0-99)
    #[arg(short, long, default_value = "1")]
    pub minutes: u32,

    /// Initial countdown seconds (clamped to 0-59)
    #[arg(short, long, default_value = "0")]
    pub seconds: u32,

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
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Initial countdown duration, clamped into the display bounds.
    pub fn initial_configuration(&self) -> TimerConfiguration {
        TimerConfiguration::new(self.minutes, self.seconds)
    }
}
