//! Reveal timer tests against a live engine.
//!
//! The summary timer is keyed to the engine epoch. These tests check that a
//! timer outliving its session is ignored.

use std::time::Duration;

use rust_rps::core::{Choice, Phase};
use rust_rps::engine::RoundEngine;
use rust_rps::opponent::ScriptedOpponent;
use rust_rps::shell::RevealTimer;

const DELAY: Duration = Duration::from_millis(20);
const PATIENCE: Duration = Duration::from_secs(2);

fn finished_engine() -> RoundEngine<ScriptedOpponent> {
    let mut engine = RoundEngine::new(ScriptedOpponent::new([Choice::Rock; 6]));
    engine.start_game("Ava").unwrap();
    while engine.phase() != Phase::Finished {
        engine.submit_move(Choice::Paper).unwrap();
        engine.acknowledge_round().unwrap();
    }
    engine
}

#[test]
fn test_reveal_for_current_session() {
    let engine = finished_engine();
    let mut timer = RevealTimer::new(DELAY);

    timer.schedule(engine.epoch());
    let ticket = timer.recv_timeout(PATIENCE).unwrap();
    assert!(timer.accept(ticket, engine.epoch()));
    assert!(!timer.is_pending());
    assert!(engine.final_verdict().is_ok());
}

#[test]
fn test_reveal_after_rematch_is_ignored() {
    let mut engine = finished_engine();
    let mut timer = RevealTimer::new(DELAY);
    timer.schedule(engine.epoch());

    // Player rematches before the timer fires; the shell forgets to cancel
    engine.rematch().unwrap();

    let ticket = timer.recv_timeout(PATIENCE).unwrap();
    assert!(!timer.accept(ticket, engine.epoch()));
    assert_eq!(engine.phase(), Phase::RoundInProgress);
}

#[test]
fn test_reveal_after_reset_is_ignored() {
    let mut engine = finished_engine();
    let mut timer = RevealTimer::new(DELAY);
    timer.schedule(engine.epoch());

    engine.reset();

    let ticket = timer.recv_timeout(PATIENCE).unwrap();
    assert!(!timer.accept(ticket, engine.epoch()));
    assert_eq!(engine.phase(), Phase::AwaitingName);
}

#[test]
fn test_cancelled_reveal_is_silent() {
    let mut engine = finished_engine();
    let mut timer = RevealTimer::new(DELAY);
    timer.schedule(engine.epoch());

    timer.cancel();
    engine.rematch().unwrap();

    assert!(timer.recv_timeout(DELAY * 10).is_none());
}

#[test]
fn test_timer_does_not_block_caller() {
    let engine = finished_engine();
    let mut timer = RevealTimer::new(Duration::from_millis(200));

    let start = std::time::Instant::now();
    timer.schedule(engine.epoch());
    assert!(start.elapsed() < Duration::from_millis(200));
    assert!(timer.try_recv().is_none());
    assert!(timer.is_pending());
}
