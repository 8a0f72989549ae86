//! Rock Paper Scissors in the terminal.
//!
//! Three rounds against a random computer opponent, or, with `--simulate`,
//! a headless batch of matches with statistics.

use clap::Parser;
use log::info;

use rust_rps::engine::RoundEngine;
use rust_rps::opponent::RandomOpponent;
use rust_rps::shell::{logging, Args, ShellError, TerminalShell};
use rust_rps::simulate::simulate;

fn main() -> Result<(), ShellError> {
    let args = Args::parse();
    let config = args.resolve()?;
    logging::init(&config)?;

    let opponent = match config.seed {
        Some(seed) => RandomOpponent::new(seed),
        None => RandomOpponent::from_entropy(),
    };
    info!("computer seed {}", opponent.seed());

    if let Some(matches) = args.simulate {
        let mut player = RandomOpponent::new(opponent.seed().wrapping_add(1));
        let mut engine = RoundEngine::new(opponent);
        let report = simulate(matches, &mut player, &mut engine)?;
        println!("{report}");
        return Ok(());
    }

    TerminalShell::new(RoundEngine::new(opponent), config).run()
}
