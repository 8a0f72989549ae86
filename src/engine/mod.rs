//! Round engine: owns the session and applies state-machine transitions.
//!
//! Front ends drive the engine with user intents (name, throw, next,
//! rematch) and draw from the `Snapshot` it hands back. The engine has no
//! notion of wall-clock time; pacing belongs to the front end.

pub mod error;
pub mod round;
pub mod snapshot;

pub use error::{EngineError, EngineResult, Operation};
pub use round::{RoundEngine, RoundReport};
pub use snapshot::Snapshot;
