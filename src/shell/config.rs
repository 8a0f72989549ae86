//! Front end configuration.
//!
//! Sources, lowest precedence first: defaults, a JSON file, command-line
//! flags (see `cli`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ShellError;

/// Front end configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Seed for the computer's throws.
    /// `None` seeds from the OS; the chosen seed is logged.
    pub seed: Option<u64>,

    /// Pause between the last round and the summary, in milliseconds.
    pub reveal_delay_ms: u64,

    /// Terminal log level (off, error, warn, info, debug, trace).
    pub log_level: String,

    /// Also write debug-level logs to this file.
    pub log_file: Option<PathBuf>,

    /// Colorize results.
    pub color: bool,

    /// Skip the name screen with this name.
    pub name: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay_ms: 1000,
            log_level: "warn".to_string(),
            log_file: None,
            color: true,
            name: None,
        }
    }
}

impl ShellConfig {
    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ShellError> {
        let text = std::fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ShellError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay_ms(mut self, ms: u64) -> Self {
        self.reveal_delay_ms = ms;
        self
    }

    /// Set the terminal log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable or disable color.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
