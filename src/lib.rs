//! # rust-rps
//!
//! Rock, Paper, Scissors: three rounds against a computer that throws at
//! random, then a final verdict.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `RoundEngine` owns the session state. Front ends read
//!    snapshots and send intents; they never write fields.
//!
//! 2. **Explicit Transitions**: Each operation is a state-machine edge.
//!    Calling one in the wrong phase is an error and changes nothing.
//!
//! 3. **No Clock in the Core**: The pause before the summary is a front end
//!    timer, tied to the session epoch so a late timer cannot misfire.
//!
//! ## Modules
//!
//! - `core`: Throws, sides, scores, session state, RNG
//! - `rules`: Round and match resolution
//! - `opponent`: Computer throw policies
//! - `engine`: The round engine and its snapshots
//! - `simulate`: Headless batches of matches
//! - `shell`: Terminal front end (config, CLI, logging, rendering, timer)

pub mod core;
pub mod rules;
pub mod opponent;
pub mod engine;
pub mod simulate;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{Choice, GameRng, GameState, Phase, Scores, Side, TOTAL_ROUNDS};

pub use crate::rules::{RoundOutcome, Verdict};

pub use crate::opponent::{Opponent, RandomOpponent, ScriptedOpponent};

pub use crate::engine::{EngineError, EngineResult, RoundEngine, RoundReport, Snapshot};

pub use crate::simulate::{simulate, SimulationReport};
