//! Round and match resolution.
//!
//! A round compares two throws by cyclic dominance. A match compares the
//! final scores: strictly greater wins, equal is a draw.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, Scores, Side};

/// Result of a round or of a whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The human player won.
    PlayerWin,
    /// The computer won.
    ComputerWin,
    /// Nobody won.
    Draw,
}

impl Verdict {
    /// Resolve one round.
    ///
    /// ```
    /// use rust_rps::core::Choice;
    /// use rust_rps::rules::Verdict;
    ///
    /// assert_eq!(Verdict::of_round(Choice::Rock, Choice::Scissors), Verdict::PlayerWin);
    /// assert_eq!(Verdict::of_round(Choice::Rock, Choice::Paper), Verdict::ComputerWin);
    /// assert_eq!(Verdict::of_round(Choice::Rock, Choice::Rock), Verdict::Draw);
    /// ```
    #[must_use]
    pub fn of_round(player: Choice, computer: Choice) -> Self {
        if player.defeats(computer) {
            Verdict::PlayerWin
        } else if computer.defeats(player) {
            Verdict::ComputerWin
        } else {
            Verdict::Draw
        }
    }

    /// Resolve a match from its final scores.
    #[must_use]
    pub fn of_scores(scores: &Scores) -> Self {
        Self::from_winner(scores.leader())
    }

    /// Build from an optional winning side.
    #[must_use]
    pub fn from_winner(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::Player) => Verdict::PlayerWin,
            Some(Side::Computer) => Verdict::ComputerWin,
            None => Verdict::Draw,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Verdict::PlayerWin => Some(Side::Player),
            Verdict::ComputerWin => Some(Side::Computer),
            Verdict::Draw => None,
        }
    }
}

/// One resolved round: both throws and who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// What the human threw.
    pub player_choice: Choice,
    /// What the computer threw.
    pub computer_choice: Choice,
    /// Who won the round.
    pub result: Verdict,
}

impl RoundOutcome {
    /// Resolve a pair of throws.
    #[must_use]
    pub fn resolve(player_choice: Choice, computer_choice: Choice) -> Self {
        Self {
            player_choice,
            computer_choice,
            result: Verdict::of_round(player_choice, computer_choice),
        }
    }
}
