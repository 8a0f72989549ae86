//! The round engine: the session state machine.
//!
//! ```text
//! AwaitingName ──start_game──▶ RoundInProgress ──submit_move──▶ RoundResolved
//!                                   ▲      ▲                         │
//!                                   │      └──acknowledge (r < 3)────┤
//!                                   │                                │
//!                                rematch ◀──── Finished ◀──acknowledge (r == 3)
//! ```
//!
//! Every operation either applies its whole transition or returns an error
//! and leaves the state untouched.

use log::{debug, warn};

use super::error::{EngineError, EngineResult, Operation};
use super::snapshot::Snapshot;
use crate::core::{Choice, GameState, Phase, Scores, TOTAL_ROUNDS};
use crate::opponent::{Opponent, RandomOpponent};
use crate::rules::{RoundOutcome, Verdict};

/// What `submit_move` hands back for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The round that was just resolved.
    pub round: u32,
    pub outcome: RoundOutcome,
    /// Scores after this round.
    pub scores: Scores,
}

/// Owns one session's `GameState` and the opponent that plays against it.
#[derive(Clone, Debug)]
pub struct RoundEngine<O: Opponent = RandomOpponent> {
    state: GameState,
    opponent: O,
}

impl RoundEngine<RandomOpponent> {
    /// Engine with a deterministic random opponent.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomOpponent::new(seed))
    }

    /// Engine with an OS-seeded random opponent.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RandomOpponent::from_entropy())
    }
}

impl<O: Opponent> RoundEngine<O> {
    /// Create an engine waiting for a name.
    pub fn new(opponent: O) -> Self {
        Self {
            state: GameState::new(),
            opponent,
        }
    }

    /// Read-only view of the state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Current session epoch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.state.epoch()
    }

    /// The opponent.
    #[must_use]
    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// Mutable access to the opponent (queue scripted throws, etc).
    pub fn opponent_mut(&mut self) -> &mut O {
        &mut self.opponent
    }

    /// Capture the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    // === Operations ===

    /// Start a match for `name`.
    ///
    /// Valid while awaiting a name, or after a finished match (a new player
    /// taking over). The name is stored trimmed.
    ///
    /// ## Errors
    ///
    /// - `InvalidState` in any other phase
    /// - `InvalidName` if `name` is empty after trimming
    pub fn start_game(&mut self, name: &str) -> EngineResult<Snapshot> {
        if !matches!(self.phase(), Phase::AwaitingName | Phase::Finished) {
            return Err(self.reject(Operation::StartGame));
        }

        let name = name.trim();
        if name.is_empty() {
            debug!("rejected empty player name");
            return Err(EngineError::InvalidName);
        }

        self.state.begin(name.to_string());
        debug!("started match for {:?} (epoch {})", name, self.epoch());
        Ok(self.snapshot())
    }

    /// Play `choice` against a fresh computer throw.
    ///
    /// ## Errors
    ///
    /// `InvalidState` unless a round is in progress. No throw is drawn.
    pub fn submit_move(&mut self, choice: Choice) -> EngineResult<RoundReport> {
        self.require(Phase::RoundInProgress, Operation::SubmitMove)?;

        let outcome = RoundOutcome::resolve(choice, self.opponent.pick());
        self.state.record(outcome);
        debug_assert!(self.state.is_consistent());

        debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            self.state.current_round(),
            outcome.player_choice,
            outcome.computer_choice,
            outcome.result,
            self.state.scores().player(),
            self.state.scores().computer(),
        );

        Ok(RoundReport {
            round: self.state.current_round(),
            outcome,
            scores: self.state.scores(),
        })
    }

    /// Move past a resolved round.
    ///
    /// Opens the next round, or finishes the match after the last one.
    /// Returns the new phase; `Finished` is the cue to schedule the summary.
    ///
    /// ## Errors
    ///
    /// `InvalidState` unless the current round is resolved.
    pub fn acknowledge_round(&mut self) -> EngineResult<Phase> {
        self.require(Phase::RoundResolved, Operation::AcknowledgeRound)?;

        if self.state.current_round < TOTAL_ROUNDS {
            self.state.current_round += 1;
            self.state.last_outcome = None;
            self.state.phase = Phase::RoundInProgress;
            debug!("opened round {}", self.state.current_round);
        } else {
            self.state.phase = Phase::Finished;
            debug!(
                "match finished {}-{}",
                self.state.scores().player(),
                self.state.scores().computer()
            );
        }

        debug_assert!(self.state.is_consistent());
        Ok(self.phase())
    }

    /// Who won the match.
    ///
    /// ## Errors
    ///
    /// `InvalidState` unless the match is finished.
    pub fn final_verdict(&self) -> EngineResult<Verdict> {
        self.require(Phase::Finished, Operation::FinalVerdict)?;
        Ok(Verdict::of_scores(&self.state.scores()))
    }

    /// Replay with the same name.
    ///
    /// ## Errors
    ///
    /// `InvalidState` unless the match is finished.
    pub fn rematch(&mut self) -> EngineResult<Snapshot> {
        self.require(Phase::Finished, Operation::Rematch)?;

        let name = std::mem::take(&mut self.state.player_name);
        self.state.begin(name);
        debug!("rematch started (epoch {})", self.epoch());
        Ok(self.snapshot())
    }

    /// Abandon the session and wait for a new name. Always valid.
    pub fn reset(&mut self) {
        self.state.clear();
        debug!("session reset (epoch {})", self.epoch());
    }

    fn require(&self, phase: Phase, operation: Operation) -> EngineResult<()> {
        if self.phase() == phase {
            Ok(())
        } else {
            Err(self.reject(operation))
        }
    }

    fn reject(&self, operation: Operation) -> EngineError {
        warn!("cannot {} while {}", operation, self.phase());
        EngineError::InvalidState {
            operation,
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ScriptedOpponent;

    fn scripted(choices: &[Choice]) -> RoundEngine<ScriptedOpponent> {
        RoundEngine::new(ScriptedOpponent::new(choices.iter().copied()))
    }

    #[test]
    fn test_start_game() {
        let mut engine = scripted(&[]);
        let snapshot = engine.start_game("  Ava ").unwrap();

        assert_eq!(snapshot.phase, Phase::RoundInProgress);
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.player_name, "Ava");
        assert_eq!(snapshot.scores, Scores::new());
    }

    #[test]
    fn test_start_game_rejects_blank_names() {
        let mut engine = scripted(&[]);

        assert_eq!(engine.start_game(""), Err(EngineError::InvalidName));
        assert_eq!(engine.start_game("   "), Err(EngineError::InvalidName));
        assert_eq!(engine.start_game("\t\n"), Err(EngineError::InvalidName));
        assert_eq!(engine.phase(), Phase::AwaitingName);
        assert_eq!(engine.epoch(), 0);
    }

    #[test]
    fn test_start_game_mid_match_rejected() {
        let mut engine = scripted(&[]);
        engine.start_game("Ava").unwrap();

        let err = engine.start_game("Bo").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidState {
                operation: Operation::StartGame,
                phase: Phase::RoundInProgress,
            }
        );
        assert_eq!(engine.state().player_name(), "Ava");
    }

    #[test]
    fn test_submit_move_resolves_round() {
        let mut engine = scripted(&[Choice::Scissors]);
        engine.start_game("Ava").unwrap();

        let report = engine.submit_move(Choice::Rock).unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.outcome.computer_choice, Choice::Scissors);
        assert_eq!(report.outcome.result, Verdict::PlayerWin);
        assert_eq!(report.scores, Scores::of(1, 0));
        assert_eq!(engine.phase(), Phase::RoundResolved);
    }

    #[test]
    fn test_submit_move_twice_rejected_without_draw() {
        let mut engine = scripted(&[Choice::Rock, Choice::Paper]);
        engine.start_game("Ava").unwrap();
        engine.submit_move(Choice::Rock).unwrap();

        assert!(engine.submit_move(Choice::Rock).is_err());
        // The second scripted throw was not consumed
        assert_eq!(engine.opponent().remaining(), 1);
    }

    #[test]
    fn test_acknowledge_advances_round() {
        let mut engine = scripted(&[Choice::Rock]);
        engine.start_game("Ava").unwrap();
        engine.submit_move(Choice::Rock).unwrap();

        assert_eq!(engine.acknowledge_round(), Ok(Phase::RoundInProgress));
        assert_eq!(engine.state().current_round(), 2);
        assert!(engine.state().last_outcome().is_none());
    }

    #[test]
    fn test_acknowledge_outside_resolved_rejected() {
        let mut engine = scripted(&[]);
        assert!(engine.acknowledge_round().is_err());

        engine.start_game("Ava").unwrap();
        assert!(engine.acknowledge_round().is_err());
        assert_eq!(engine.state().current_round(), 1);
    }

    #[test]
    fn test_final_verdict_only_when_finished() {
        let mut engine = scripted(&[Choice::Rock; 3]);
        engine.start_game("Ava").unwrap();
        assert!(engine.final_verdict().is_err());

        for _ in 0..3 {
            engine.submit_move(Choice::Rock).unwrap();
            engine.acknowledge_round().unwrap();
        }

        assert_eq!(engine.phase(), Phase::Finished);
        assert_eq!(engine.final_verdict(), Ok(Verdict::Draw));
        assert_eq!(engine.snapshot().verdict, Some(Verdict::Draw));
    }

    #[test]
    fn test_rematch_keeps_name() {
        let mut engine = scripted(&[Choice::Scissors; 3]);
        engine.start_game("Ava").unwrap();
        for _ in 0..3 {
            engine.submit_move(Choice::Rock).unwrap();
            engine.acknowledge_round().unwrap();
        }
        let before = engine.epoch();

        let snapshot = engine.rematch().unwrap();

        assert_eq!(snapshot.player_name, "Ava");
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.scores, Scores::new());
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.phase, Phase::RoundInProgress);
        assert_eq!(engine.epoch(), before + 1);
    }

    #[test]
    fn test_rematch_mid_match_rejected() {
        let mut engine = scripted(&[]);
        engine.start_game("Ava").unwrap();
        assert!(engine.rematch().is_err());
    }

    #[test]
    fn test_reset_returns_to_name_entry() {
        let mut engine = scripted(&[]);
        engine.start_game("Ava").unwrap();
        engine.reset();

        assert_eq!(engine.phase(), Phase::AwaitingName);
        assert!(engine.state().player_name().is_empty());
        assert!(engine.start_game("Bo").is_ok());
    }

    #[test]
    fn test_new_player_after_finish() {
        let mut engine = scripted(&[Choice::Paper; 3]);
        engine.start_game("Ava").unwrap();
        for _ in 0..3 {
            engine.submit_move(Choice::Rock).unwrap();
            engine.acknowledge_round().unwrap();
        }

        let snapshot = engine.start_game("Bo").unwrap();
        assert_eq!(snapshot.player_name, "Bo");
        assert_eq!(snapshot.scores, Scores::new());
    }
}
