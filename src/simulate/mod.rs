//! Headless match simulation.
//!
//! Drives full matches through `RoundEngine` with an automated player and
//! tallies what happened. Handy for eyeballing that the computer's throws
//! really are uniform.

mod report;

pub use report::{SimulationReport, VerdictCounts};

use log::info;

use crate::core::Phase;
use crate::engine::{EngineResult, RoundEngine};
use crate::opponent::Opponent;

/// Name used for the automated player.
pub const SIMULATED_NAME: &str = "Simulator";

/// Play `matches` complete matches.
///
/// `player` supplies the human side's throws. The engine is reset first, so
/// any session in progress is abandoned.
///
/// ## Errors
///
/// Only if the engine rejects a transition, which would be a bug in this loop.
pub fn simulate<P: Opponent, O: Opponent>(
    matches: u64,
    player: &mut P,
    engine: &mut RoundEngine<O>,
) -> EngineResult<SimulationReport> {
    let mut report = SimulationReport::new();
    if matches == 0 {
        return Ok(report);
    }

    engine.reset();
    engine.start_game(SIMULATED_NAME)?;

    for played in 0..matches {
        if played > 0 {
            engine.rematch()?;
        }

        while engine.phase() != Phase::Finished {
            let round = engine.submit_move(player.pick())?;
            report.record_round(&round.outcome);
            engine.acknowledge_round()?;
        }

        report.record_match(engine.final_verdict()?);
    }

    info!(
        "simulated {} matches ({} rounds)",
        report.matches, report.rounds
    );
    Ok(report)
}
