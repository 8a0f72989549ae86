//! Terminal front end for the round engine.
//!
//! - `config`: front end settings (seed, reveal delay, logging, color)
//! - `cli`: command-line flags layered over the config
//! - `logging`: simplelog setup
//! - `render`: screen text from snapshots
//! - `timer`: the one-shot reveal timer
//! - `terminal`: the interactive prompt loop

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod terminal;
pub mod timer;

pub use cli::Args;
pub use config::ShellConfig;
pub use error::ShellError;
pub use render::Tone;
pub use terminal::{Flow, TerminalShell};
pub use timer::{RevealTimer, Ticket};
