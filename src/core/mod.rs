//! Core types: throws, sides, scores, session state, RNG.
//!
//! These are the building blocks the round engine works on. Nothing in
//! here knows about prompts, timers or rendering.

pub mod choice;
pub mod side;
pub mod rng;
pub mod state;

pub use choice::{Choice, ParseChoiceError};
pub use side::{Scores, Side};
pub use rng::GameRng;
pub use state::{GameState, Phase, TOTAL_ROUNDS};
