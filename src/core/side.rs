//! The two sides of a match and per-side score storage.
//!
//! ## Side
//!
//! The human player or the computer opponent.
//!
//! ## Scores
//!
//! Per-side round wins backed by a fixed array for O(1) access.
//! Indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the raw side index (player is 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Round wins per side.
///
/// ## Example
///
/// ```
/// use rust_rps::core::{Scores, Side};
///
/// let mut scores = Scores::new();
/// scores[Side::Player] += 1;
///
/// assert_eq!(scores[Side::Player], 1);
/// assert_eq!(scores[Side::Computer], 0);
/// assert_eq!(scores.total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    data: [u32; 2],
}

impl Scores {
    /// Both sides at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0, 0] }
    }

    /// Build from explicit player and computer scores.
    #[must_use]
    pub const fn of(player: u32, computer: u32) -> Self {
        Self {
            data: [player, computer],
        }
    }

    /// The human player's score.
    #[must_use]
    pub const fn player(&self) -> u32 {
        self.data[0]
    }

    /// The computer's score.
    #[must_use]
    pub const fn computer(&self) -> u32 {
        self.data[1]
    }

    /// Points awarded so far across both sides.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.data[0] + self.data[1]
    }

    /// The side strictly ahead, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.player().cmp(&self.computer()) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Add one point for `side`.
    pub fn award(&mut self, side: Side) {
        self[side] += 1;
    }
}

impl Index<Side> for Scores {
    type Output = u32;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl IndexMut<Side> for Scores {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
