//! Immutable views of the session for rendering.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Phase, Scores, TOTAL_ROUNDS};
use crate::rules::{RoundOutcome, Verdict};

/// Everything a front end needs to draw the current screen.
///
/// Taken by value so the renderer never holds a borrow on the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub round: u32,
    pub total_rounds: u32,
    pub player_name: String,
    pub scores: Scores,
    pub last_outcome: Option<RoundOutcome>,
    /// Shares structure with the engine's history.
    pub history: Vector<RoundOutcome>,
    /// Present only once the match is finished.
    pub verdict: Option<Verdict>,
    pub epoch: u64,
}

impl Snapshot {
    /// Capture the state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let verdict = (state.phase() == Phase::Finished).then(|| Verdict::of_scores(&state.scores()));

        Self {
            phase: state.phase(),
            round: state.current_round(),
            total_rounds: TOTAL_ROUNDS,
            player_name: state.player_name().to_string(),
            scores: state.scores(),
            last_outcome: state.last_outcome().copied(),
            history: state.history().clone(),
            verdict,
            epoch: state.epoch(),
        }
    }

    /// Check if the current round is the last one.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.round >= self.total_rounds
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self::capture(state)
    }
}
