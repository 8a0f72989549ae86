//! Errors returned by the round engine.

use thiserror::Error;

use crate::core::Phase;

/// An engine operation, named for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    StartGame,
    SubmitMove,
    AcknowledgeRound,
    FinalVerdict,
    Rematch,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Operation::StartGame => "start a game",
            Operation::SubmitMove => "submit a move",
            Operation::AcknowledgeRound => "acknowledge a round",
            Operation::FinalVerdict => "read the final verdict",
            Operation::Rematch => "start a rematch",
        };
        f.write_str(text)
    }
}

/// Engine failures. Neither is fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The name was empty or only whitespace. Re-prompt.
    #[error("player name must not be empty")]
    InvalidName,

    /// The operation is not valid in the current phase.
    /// The caller is out of step with the engine.
    #[error("cannot {operation} while {phase}")]
    InvalidState { operation: Operation, phase: Phase },
}

pub type EngineResult<T> = Result<T, EngineError>;
