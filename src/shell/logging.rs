//! Logger setup for the `rps` binary.

use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use super::config::ShellConfig;
use super::error::ShellError;

/// Parse a level name ("warn", "debug", ...).
pub fn parse_level(level: &str) -> Result<LevelFilter, ShellError> {
    LevelFilter::from_str(level).map_err(|_| ShellError::LogLevel(level.to_string()))
}

/// Install the global logger.
///
/// Terminal output at the configured level; when a log file is set, it
/// receives everything at debug and above.
pub fn init(config: &ShellConfig) -> Result<(), ShellError> {
    let level = parse_level(&config.log_level)?;
    let settings = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(level, settings.clone(), TerminalMode::Stderr, color));

    if let Some(path) = &config.log_file {
        let file = std::fs::File::create(path).map_err(|source| ShellError::LogFile {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, settings, file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert!(matches!(parse_level("loud"), Err(ShellError::LogLevel(_))));
    }
}
