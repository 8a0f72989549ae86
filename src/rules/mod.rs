//! Rules of the game.
//!
//! - How a round is decided (cyclic dominance)
//! - How a match is decided (final score comparison)
//!
//! The round engine calls into these but never interprets throws itself.

pub mod verdict;

pub use verdict::{RoundOutcome, Verdict};
