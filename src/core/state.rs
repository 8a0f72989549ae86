//! Game state for one play session.
//!
//! ## Phase
//!
//! Where the session sits in the round cycle:
//! name entry, a round awaiting a throw, a resolved round, or the summary.
//!
//! ## GameState
//!
//! Complete session state:
//! - Player name
//! - Round counter and scores
//! - Last round outcome and round history
//! - Session epoch (bumped whenever the session restarts)
//!
//! Fields are only writable inside the crate. Callers mutate the state
//! through `RoundEngine` so the counters cannot drift apart.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::side::Scores;
use crate::rules::RoundOutcome;

/// Rounds in a match.
pub const TOTAL_ROUNDS: u32 = 3;

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to enter a name.
    #[default]
    AwaitingName,
    /// A round is open and waiting for a throw.
    RoundInProgress,
    /// A round was resolved and waiting to be acknowledged.
    RoundResolved,
    /// All rounds played; the summary is available.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Phase::AwaitingName => "awaiting a name",
            Phase::RoundInProgress => "a round is in progress",
            Phase::RoundResolved => "a round is resolved",
            Phase::Finished => "the match is finished",
        };
        f.write_str(text)
    }
}

/// State of one session.
///
/// Uses an `im` vector for the round history so snapshots clone in O(1).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) player_name: String,

    /// 1-based; meaningful outside `AwaitingName`.
    pub(crate) current_round: u32,

    pub(crate) scores: Scores,

    pub(crate) phase: Phase,

    /// Cleared whenever a new round opens.
    pub(crate) last_outcome: Option<RoundOutcome>,

    /// Outcomes of the rounds completed this session.
    pub(crate) history: Vector<RoundOutcome>,

    /// Incremented by every restart so stale timers can be told apart.
    pub(crate) epoch: u64,
}

impl GameState {
    /// Fresh state waiting for a name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open round one for `name` with zeroed scores.
    pub(crate) fn begin(&mut self, name: String) {
        self.player_name = name;
        self.current_round = 1;
        self.scores = Scores::new();
        self.phase = Phase::RoundInProgress;
        self.last_outcome = None;
        self.history.clear();
        self.epoch += 1;
    }

    /// Drop the session back to name entry.
    pub(crate) fn clear(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self {
            epoch,
            ..Self::default()
        };
    }

    /// Record a resolved round and award its point.
    pub(crate) fn record(&mut self, outcome: RoundOutcome) {
        if let Some(side) = outcome.result.winner() {
            self.scores.award(side);
        }
        self.history.push_back(outcome);
        self.last_outcome = Some(outcome);
        self.phase = Phase::RoundResolved;
    }

    // === Accessors ===

    /// The player's name; empty while awaiting a name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Current round (1-based), or 0 before the first game starts.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Current scores.
    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The most recently resolved round, if the current one is resolved.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// Outcomes of completed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundOutcome> {
        &self.history
    }

    /// Session epoch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Rounds resolved so far this session.
    #[must_use]
    pub fn rounds_completed(&self) -> u32 {
        self.history.len() as u32
    }

    /// Check the counter invariants.
    ///
    /// - At most one point per completed round
    /// - Round never past `TOTAL_ROUNDS`
    /// - A name is present outside `AwaitingName`
    /// - Completed rounds line up with the phase
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let completed = self.rounds_completed();
        let rounds_line_up = match self.phase {
            Phase::AwaitingName => completed == 0 && self.current_round == 0,
            Phase::RoundInProgress => completed + 1 == self.current_round,
            Phase::RoundResolved => completed == self.current_round,
            Phase::Finished => completed == TOTAL_ROUNDS && self.current_round == TOTAL_ROUNDS,
        };
        let named = self.phase == Phase::AwaitingName || !self.player_name.is_empty();

        self.scores.total() <= completed
            && self.current_round <= TOTAL_ROUNDS
            && named
            && rounds_line_up
    }
}
