//! The three throws and the cyclic dominance between them.
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
//! Equal throws beat nothing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Every throw, in display order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Position in [`Choice::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// The throw this one defeats.
    ///
    /// ```
    /// use rust_rps::core::Choice;
    ///
    /// assert_eq!(Choice::Rock.prey(), Choice::Scissors);
    /// assert_eq!(Choice::Scissors.prey(), Choice::Paper);
    /// assert_eq!(Choice::Paper.prey(), Choice::Rock);
    /// ```
    #[must_use]
    pub const fn prey(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Check if this throw defeats `other`.
    #[must_use]
    pub fn defeats(self, other: Choice) -> bool {
        self.prey() == other
    }

    /// Upper-case name used in round feedback ("ROCK").
    #[must_use]
    pub const fn shout(self) -> &'static str {
        match self {
            Choice::Rock => "ROCK",
            Choice::Paper => "PAPER",
            Choice::Scissors => "SCISSORS",
        }
    }

    /// Button glyph for the battle screen.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Choice::Rock => "\u{1FAA8}",
            Choice::Paper => "\u{1F4C4}",
            Choice::Scissors => "\u{2702}\u{FE0F}",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Text that names no throw.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown choice {0:?}, expected rock, paper or scissors")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Accepts full names or their first letter, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "s" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError(s.to_string())),
        }
    }
}
