//! Tallies collected during simulation.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::core::Choice;
use crate::rules::{RoundOutcome, Verdict};

/// Count per verdict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCounts {
    pub player_win: u64,
    pub computer_win: u64,
    pub draw: u64,
}

impl Index<Verdict> for VerdictCounts {
    type Output = u64;

    fn index(&self, verdict: Verdict) -> &Self::Output {
        match verdict {
            Verdict::PlayerWin => &self.player_win,
            Verdict::ComputerWin => &self.computer_win,
            Verdict::Draw => &self.draw,
        }
    }
}

impl IndexMut<Verdict> for VerdictCounts {
    fn index_mut(&mut self, verdict: Verdict) -> &mut Self::Output {
        match verdict {
            Verdict::PlayerWin => &mut self.player_win,
            Verdict::ComputerWin => &mut self.computer_win,
            Verdict::Draw => &mut self.draw,
        }
    }
}

/// Statistics from a batch of simulated matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Matches played to completion.
    pub matches: u64,

    /// Rounds played across all matches.
    pub rounds: u64,

    /// Computer throws, indexed by `Choice::index`.
    pub computer_throws: [u64; 3],

    /// Round results.
    pub round_results: VerdictCounts,

    /// Match results.
    pub match_results: VerdictCounts,
}

impl SimulationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolved round.
    pub fn record_round(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        self.computer_throws[outcome.computer_choice.index()] += 1;
        self.round_results[outcome.result] += 1;
    }

    /// Count one finished match.
    pub fn record_match(&mut self, verdict: Verdict) {
        self.matches += 1;
        self.match_results[verdict] += 1;
    }

    /// Fraction of computer throws that were `choice`.
    #[must_use]
    pub fn throw_frequency(&self, choice: Choice) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.computer_throws[choice.index()] as f64 / self.rounds as f64
        }
    }

    /// Fraction of rounds that ended with `verdict`.
    #[must_use]
    pub fn round_frequency(&self, verdict: Verdict) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.round_results[verdict] as f64 / self.rounds as f64
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} matches, {} rounds", self.matches, self.rounds)?;
        writeln!(f, "computer throws:")?;
        for choice in Choice::ALL {
            writeln!(
                f,
                "  {:<9} {:>8} ({:.3})",
                choice.to_string(),
                self.computer_throws[choice.index()],
                self.throw_frequency(choice)
            )?;
        }
        writeln!(
            f,
            "rounds:  player {} / computer {} / draw {}",
            self.round_results.player_win, self.round_results.computer_win, self.round_results.draw
        )?;
        write!(
            f,
            "matches: player {} / computer {} / draw {}",
            self.match_results.player_win, self.match_results.computer_win, self.match_results.draw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frequencies() {
        let report = SimulationReport::new();
        assert_eq!(report.throw_frequency(Choice::Rock), 0.0);
        assert_eq!(report.round_frequency(Verdict::Draw), 0.0);
    }

    #[test]
    fn test_record_round() {
        let mut report = SimulationReport::new();
        report.record_round(&RoundOutcome::resolve(Choice::Rock, Choice::Paper));
        report.record_round(&RoundOutcome::resolve(Choice::Rock, Choice::Rock));

        assert_eq!(report.rounds, 2);
        assert_eq!(report.computer_throws, [1, 1, 0]);
        assert_eq!(report.round_results[Verdict::ComputerWin], 1);
        assert_eq!(report.round_results[Verdict::Draw], 1);
        assert!((report.throw_frequency(Choice::Paper) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_display_mentions_totals() {
        let mut report = SimulationReport::new();
        report.record_match(Verdict::PlayerWin);
        let text = report.to_string();
        assert!(text.starts_with("1 matches, 0 rounds"));
        assert!(text.contains("matches: player 1"));
    }
}
