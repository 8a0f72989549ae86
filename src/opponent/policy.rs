//! Opponent policies for picking throws.
//!
//! - `RandomOpponent`: uniform over the three throws (the production opponent)
//! - `ScriptedOpponent`: replays a fixed sequence (forced draws for tests and demos)

use std::collections::VecDeque;

use crate::core::{Choice, GameRng};

// =============================================================================
// Opponent
// =============================================================================

/// Source of throws for one side of the match.
///
/// The round engine asks the opponent for a throw every time the player
/// submits a move. The same trait also drives the human side in headless
/// simulations.
pub trait Opponent {
    /// Pick the next throw.
    fn pick(&mut self) -> Choice;
}

impl<O: Opponent + ?Sized> Opponent for Box<O> {
    fn pick(&mut self) -> Choice {
        (**self).pick()
    }
}

// =============================================================================
// Random
// =============================================================================

/// Uniform random opponent.
///
/// Each throw has probability 1/3, independent of history.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    rng: GameRng,
}

impl RandomOpponent {
    /// Deterministic opponent for a given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Opponent seeded from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// The seed in use, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Opponent for RandomOpponent {
    fn pick(&mut self) -> Choice {
        self.rng.pick(&Choice::ALL)
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Opponent that replays a queue of throws.
///
/// Once the queue runs dry it cycles Rock, Paper, Scissors so that it
/// never stalls a match.
#[derive(Clone, Debug, Default)]
pub struct ScriptedOpponent {
    script: VecDeque<Choice>,
    cycle: usize,
}

impl ScriptedOpponent {
    /// Create an opponent that will play `choices` in order.
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: choices.into_iter().collect(),
            cycle: 0,
        }
    }

    /// Queue another throw.
    pub fn push(&mut self, choice: Choice) {
        self.script.push_back(choice);
    }

    /// Throws left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Opponent for ScriptedOpponent {
    fn pick(&mut self) -> Choice {
        self.script.pop_front().unwrap_or_else(|| {
            let choice = Choice::ALL[self.cycle % Choice::ALL.len()];
            self.cycle += 1;
            choice
        })
    }
}
