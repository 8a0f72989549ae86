//! Computer opponent.
//!
//! The engine depends only on the `Opponent` trait. Production play uses
//! `RandomOpponent`; tests force draws with `ScriptedOpponent`.

mod policy;

pub use policy::{Opponent, RandomOpponent, ScriptedOpponent};
