//! Screen text derived from engine snapshots.
//!
//! Pure functions: no printing, no color. The terminal applies `Tone`s.

use crate::core::{Phase, Scores};
use crate::engine::Snapshot;
use crate::rules::{RoundOutcome, Verdict};

/// Longest name shown on screen, in characters.
pub const NAME_DISPLAY_LIMIT: usize = 49;

/// Prompt on the name screen.
pub const NAME_PROMPT: &str = "Enter your warrior name...";

/// Shown when the name is blank.
pub const NAME_ERROR: &str = "Hold on! Every hero needs a name!";

/// Battle screen feedback before a throw.
pub const MOVE_PROMPT: &str = "Make your move...";

/// Header between the last round and the summary.
pub const CALCULATING: &str = "Calculating Results...";

/// How a line should be emphasized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
    Error,
}

impl Tone {
    /// Tone for a result from the player's point of view.
    #[must_use]
    pub fn of(verdict: Verdict) -> Self {
        match verdict {
            Verdict::PlayerWin => Tone::Success,
            Verdict::ComputerWin => Tone::Error,
            Verdict::Draw => Tone::Warning,
        }
    }
}

/// Name as displayed, cut to `NAME_DISPLAY_LIMIT` characters.
/// Falls back to "Player" when empty.
#[must_use]
pub fn display_name(name: &str) -> &str {
    if name.is_empty() {
        return "Player";
    }
    match name.char_indices().nth(NAME_DISPLAY_LIMIT) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

/// Round header ("Round 2: Fight!").
#[must_use]
pub fn round_header(snapshot: &Snapshot) -> String {
    match snapshot.phase {
        Phase::AwaitingName => String::new(),
        Phase::RoundInProgress | Phase::RoundResolved => format!("Round {}: Fight!", snapshot.round),
        Phase::Finished => CALCULATING.to_string(),
    }
}

/// Running score ("Ava: 1  |  Computer: 0").
#[must_use]
pub fn score_line(name: &str, scores: &Scores) -> String {
    format!(
        "{}: {}  |  Computer: {}",
        display_name(name),
        scores.player(),
        scores.computer()
    )
}

/// Feedback under the header: the throws, or a prompt for one.
#[must_use]
pub fn feedback_line(outcome: Option<&RoundOutcome>) -> String {
    match outcome {
        Some(outcome) => format!(
            "You: {}  vs  PC: {}",
            outcome.player_choice.shout(),
            outcome.computer_choice.shout()
        ),
        None => MOVE_PROMPT.to_string(),
    }
}

/// Round result text.
#[must_use]
pub fn round_result(verdict: Verdict) -> (&'static str, Tone) {
    let text = match verdict {
        Verdict::PlayerWin => "You Won!",
        Verdict::ComputerWin => "Computer Won.",
        Verdict::Draw => "It's a Draw.",
    };
    (text, Tone::of(verdict))
}

/// Label on the button that moves past a resolved round.
#[must_use]
pub fn next_label(snapshot: &Snapshot) -> &'static str {
    if snapshot.is_final_round() {
        "Next"
    } else {
        "Next Round ->"
    }
}

/// Headline of the result screen.
#[must_use]
pub fn final_outcome(name: &str, verdict: Verdict) -> (String, Tone) {
    let text = match verdict {
        Verdict::PlayerWin => format!("CHAMPION!\n{} wins!", display_name(name)),
        Verdict::ComputerWin => "DEFEAT!\nThe Computer won.".to_string(),
        Verdict::Draw => "DRAW GAME!".to_string(),
    };
    (text, Tone::of(verdict))
}

/// Final score line ("Final Score: 2 - 1").
#[must_use]
pub fn final_score(scores: &Scores) -> String {
    format!("Final Score: {} - {}", scores.player(), scores.computer())
}

/// One line per completed round for the result screen.
#[must_use]
pub fn recap<'a>(history: impl IntoIterator<Item = &'a RoundOutcome>) -> Vec<String> {
    history
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| {
            format!(
                "Round {}: {} vs {} ({})",
                i + 1,
                outcome.player_choice.shout(),
                outcome.computer_choice.shout(),
                round_result(outcome.result).0
            )
        })
        .collect()
}
