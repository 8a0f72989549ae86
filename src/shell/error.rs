//! Errors raised by the terminal front end.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("terminal prompt failed")]
    Prompt {
        #[from]
        source: dialoguer::Error,
    },
    #[error("terminal I/O failed")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("could not read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not create log file {}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
    #[error("could not initialize logger")]
    Logger {
        #[from]
        source: log::SetLoggerError,
    },
    #[error("simulation stopped")]
    Simulation {
        #[from]
        source: EngineError,
    },
}
