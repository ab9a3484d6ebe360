//! Command-line argument parsing for the demo binary.

use clap::Parser;
use std::path::PathBuf;

use repl_router::config::AppConfig;

/// Interactive demo of command routing and flag validation.
#[derive(Parser, Debug)]
#[command(name = "repl-router")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "REPL_ROUTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read input lines from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, falling back to the platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::default_path)
    }
}
