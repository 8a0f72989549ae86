//! Command-line arguments for the `rps` binary.

use std::path::PathBuf;

use clap::Parser;

use super::config::ShellConfig;
use super::error::ShellError;

/// Rock, Paper, Scissors: three rounds against the computer.
#[derive(Parser, Debug, Default)]
#[command(name = "rps", version, about)]
pub struct Args {
    /// JSON config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's throws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the final summary, in milliseconds
    #[arg(long)]
    pub reveal_delay_ms: Option<u64>,

    /// Player name (skips the name screen)
    #[arg(long)]
    pub name: Option<String>,

    /// Terminal log level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Play this many matches headlessly and print statistics
    #[arg(long, value_name = "MATCHES")]
    pub simulate: Option<u64>,
}

impl Args {
    /// Build the effective config: file (if any), then flags on top.
    pub fn resolve(&self) -> Result<ShellConfig, ShellError> {
        let base = match &self.config {
            Some(path) => ShellConfig::from_json_file(path)?,
            None => ShellConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Overlay the flags that were given onto `config`.
    #[must_use]
    pub fn apply(&self, mut config: ShellConfig) -> ShellConfig {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ms) = self.reveal_delay_ms {
            config.reveal_delay_ms = ms;
        }
        if let Some(name) = &self.name {
            config.name = Some(name.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if self.no_color {
            config.color = false;
        }
        config
    }
}
