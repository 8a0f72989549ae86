//! Interactive terminal front end.
//!
//! Three screens, picked from the engine phase on every pass:
//! name entry, battle (throw, then acknowledge) and result.
//!
//! Screens only prompt and print. User intents go through the `on_*`
//! handlers, which forward to the engine. Rejected intents are logged by
//! the engine and otherwise ignored.
//!
//! The pause before the result screen reads no input. The shell polls the
//! reveal timer and prints progress until it fires; Ctrl-C still ends the
//! process.

use std::io::Write;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use dialoguer::{Input, Select};
use log::{debug, info};

use super::config::ShellConfig;
use super::error::ShellError;
use super::render::{self, Tone};
use super::timer::RevealTimer;
use crate::core::{Choice, Phase};
use crate::engine::{EngineError, RoundEngine};
use crate::opponent::Opponent;
use crate::rules::Verdict;

/// Whether the main loop keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const EXIT: &str = "Exit";
const TYPE_IT: &str = "Type it (r/p/s)";
const REMATCH: &str = "Rematch?";
const NEW_PLAYER: &str = "New player";

/// How often the calculating screen checks the reveal timer.
const REVEAL_POLL: Duration = Duration::from_millis(100);

/// Terminal front end around a `RoundEngine`.
pub struct TerminalShell<O: Opponent> {
    engine: RoundEngine<O>,
    timer: RevealTimer,
    config: ShellConfig,
    /// Summary shown for the current finished match.
    revealed: bool,
}

impl<O: Opponent> TerminalShell<O> {
    /// Wrap `engine` with the given config.
    pub fn new(engine: RoundEngine<O>, config: ShellConfig) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }
        Self {
            engine,
            timer: RevealTimer::new(config.reveal_delay()),
            config,
            revealed: false,
        }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &RoundEngine<O> {
        &self.engine
    }

    /// Check if the summary has been revealed for the finished match.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Run until the player exits.
    pub fn run(&mut self) -> Result<(), ShellError> {
        if let Some(name) = self.config.name.clone() {
            self.on_name(&name);
        }

        loop {
            let flow = match self.engine.phase() {
                Phase::AwaitingName => self.name_screen()?,
                Phase::RoundInProgress => self.battle_screen()?,
                Phase::RoundResolved => self.resolved_screen()?,
                Phase::Finished => self.result_screen()?,
            };

            if flow == Flow::Exit {
                info!("player exited");
                self.timer.cancel();
                return Ok(());
            }
        }
    }

    // === Intents ===

    /// Name submitted. Returns `false` if the name was rejected.
    pub fn on_name(&mut self, name: &str) -> bool {
        match self.engine.start_game(name) {
            Ok(_) => {
                self.timer.cancel();
                self.revealed = false;
                true
            }
            Err(EngineError::InvalidName) => {
                println!("{}", paint(render::NAME_ERROR, Tone::Error));
                false
            }
            Err(err) => {
                debug!("name ignored: {err}");
                false
            }
        }
    }

    /// Throw chosen.
    pub fn on_choice(&mut self, choice: Choice) {
        if let Err(err) = self.engine.submit_move(choice) {
            debug!("throw ignored: {err}");
        }
    }

    /// Throw typed as text ("rock", "r", ...). Returns `false` if the text
    /// names no throw.
    pub fn on_typed(&mut self, text: &str) -> bool {
        match text.parse::<Choice>() {
            Ok(choice) => {
                self.on_choice(choice);
                true
            }
            Err(err) => {
                println!("{}", paint(&err.to_string(), Tone::Warning));
                false
            }
        }
    }

    /// "Next" pressed on a resolved round. Schedules the reveal after the
    /// last round.
    pub fn on_next(&mut self) {
        match self.engine.acknowledge_round() {
            Ok(Phase::Finished) => {
                self.revealed = false;
                self.timer.schedule(self.engine.epoch());
            }
            Ok(_) => {}
            Err(err) => debug!("next ignored: {err}"),
        }
    }

    /// Check the reveal timer without blocking. Returns `true` once the
    /// summary may be shown.
    ///
    /// Reschedules if a finished match has no timer pending.
    pub fn poll_reveal(&mut self) -> bool {
        if self.revealed {
            return true;
        }
        if self.engine.phase() != Phase::Finished {
            return false;
        }

        while let Some(ticket) = self.timer.try_recv() {
            if self.timer.accept(ticket, self.engine.epoch()) {
                self.revealed = true;
                return true;
            }
        }

        if !self.timer.is_pending() {
            debug!("no reveal pending, rescheduling");
            self.timer.schedule(self.engine.epoch());
        }
        false
    }

    /// Rematch requested from the result screen.
    pub fn on_rematch(&mut self) {
        self.timer.cancel();
        match self.engine.rematch() {
            Ok(_) => self.revealed = false,
            Err(err) => debug!("rematch ignored: {err}"),
        }
    }

    /// New player requested from the result screen.
    pub fn on_new_player(&mut self) {
        self.timer.cancel();
        self.engine.reset();
        self.revealed = false;
    }

    // === Screens ===

    fn name_screen(&mut self) -> Result<Flow, ShellError> {
        println!();
        println!("{}", "Epic Rock Paper Scissors Battle".purple().bold());
        let name: String = Input::new()
            .with_prompt(render::NAME_PROMPT)
            .allow_empty(true)
            .interact_text()?;
        self.on_name(&name);
        Ok(Flow::Continue)
    }

    fn battle_screen(&mut self) -> Result<Flow, ShellError> {
        let snapshot = self.engine.snapshot();
        println!();
        println!("{}", render::round_header(&snapshot).as_str().purple().bold());
        println!("{}", render::score_line(&snapshot.player_name, &snapshot.scores).as_str().dimmed());
        println!("{}", render::feedback_line(None));

        let mut items: Vec<String> = Choice::ALL
            .iter()
            .map(|choice| format!("{} {}", choice.glyph(), choice))
            .collect();
        items.push(TYPE_IT.to_string());
        items.push(EXIT.to_string());

        let selection = Select::new().items(&items).default(0).interact()?;
        if let Some(&choice) = Choice::ALL.get(selection) {
            self.on_choice(choice);
            return Ok(Flow::Continue);
        }
        if items[selection] == EXIT {
            return Ok(Flow::Exit);
        }

        let text: String = Input::new().with_prompt(render::MOVE_PROMPT).interact_text()?;
        self.on_typed(&text);
        Ok(Flow::Continue)
    }

    fn calculating_screen(&mut self) -> Result<(), ShellError> {
        let mut stdout = std::io::stdout();
        while !self.poll_reveal() {
            print!("{}", ".".dimmed());
            stdout.flush()?;
            std::thread::sleep(REVEAL_POLL);
        }
        println!();
        Ok(())
    }

    fn resolved_screen(&mut self) -> Result<Flow, ShellError> {
        let snapshot = self.engine.snapshot();
        println!("{}", render::feedback_line(snapshot.last_outcome.as_ref()));
        if let Some(outcome) = &snapshot.last_outcome {
            let (text, tone) = render::round_result(outcome.result);
            println!("{}", paint(text, tone));
        }
        println!("{}", render::score_line(&snapshot.player_name, &snapshot.scores).as_str().dimmed());

        let items = [render::next_label(&snapshot), EXIT];
        let selection = Select::new().items(&items).default(0).interact()?;
        if selection == 1 {
            return Ok(Flow::Exit);
        }

        self.on_next();
        if self.engine.phase() == Phase::Finished {
            println!();
            println!("{}", render::round_header(&self.engine.snapshot()).as_str().purple().bold());
        }
        Ok(Flow::Continue)
    }

    fn result_screen(&mut self) -> Result<Flow, ShellError> {
        self.calculating_screen()?;

        let snapshot = self.engine.snapshot();
        let verdict = snapshot
            .verdict
            .unwrap_or_else(|| Verdict::of_scores(&snapshot.scores));
        let (headline, tone) = render::final_outcome(&snapshot.player_name, verdict);

        println!();
        println!("{}", paint(&headline, tone));
        println!("{}", render::final_score(&snapshot.scores));
        for line in render::recap(&snapshot.history) {
            println!("  {}", line.as_str().dimmed());
        }

        let items = [REMATCH, NEW_PLAYER, EXIT];
        match Select::new().items(&items).default(0).interact()? {
            0 => self.on_rematch(),
            1 => self.on_new_player(),
            _ => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Success => text.green().bold(),
        Tone::Warning => text.yellow().bold(),
        Tone::Error => text.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scores;
    use crate::opponent::ScriptedOpponent;

    const PATIENCE: Duration = Duration::from_secs(2);

    fn shell_with_delay(computer: &[Choice], delay_ms: u64) -> TerminalShell<ScriptedOpponent> {
        let engine = RoundEngine::new(ScriptedOpponent::new(computer.iter().copied()));
        let config = ShellConfig::default()
            .with_reveal_delay_ms(delay_ms)
            .with_color(false);
        TerminalShell::new(engine, config)
    }

    fn shell(computer: &[Choice]) -> TerminalShell<ScriptedOpponent> {
        shell_with_delay(computer, 5)
    }

    fn play_out(shell: &mut TerminalShell<ScriptedOpponent>, choice: Choice) {
        while shell.engine().phase() != Phase::Finished {
            shell.on_choice(choice);
            shell.on_next();
        }
    }

    /// Poll until revealed or out of patience.
    fn reveal(shell: &mut TerminalShell<ScriptedOpponent>) -> bool {
        let start = std::time::Instant::now();
        while start.elapsed() < PATIENCE {
            if shell.poll_reveal() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut shell = shell(&[]);
        assert!(!shell.on_name("   "));
        assert_eq!(shell.engine().phase(), Phase::AwaitingName);
        assert!(shell.on_name("Ava"));
    }

    #[test]
    fn test_typed_throws() {
        let mut shell = shell(&[Choice::Rock; 3]);
        shell.on_name("Ava");

        assert!(!shell.on_typed("lizard"));
        assert_eq!(shell.engine().phase(), Phase::RoundInProgress);

        assert!(shell.on_typed(" P "));
        let outcome = shell.engine().state().last_outcome().copied().unwrap();
        assert_eq!(outcome.player_choice, Choice::Paper);
        assert_eq!(outcome.result, Verdict::PlayerWin);
    }

    #[test]
    fn test_reveal_after_last_round() {
        let mut shell = shell(&[Choice::Scissors; 3]);
        shell.on_name("Ava");
        play_out(&mut shell, Choice::Rock);

        assert!(!shell.is_revealed());
        assert!(reveal(&mut shell));
        assert!(shell.is_revealed());
        assert_eq!(shell.engine().snapshot().verdict, Some(Verdict::PlayerWin));
    }

    #[test]
    fn test_poll_does_not_wait_for_timer() {
        let mut shell = shell_with_delay(&[Choice::Scissors; 3], 500);
        shell.on_name("Ava");
        play_out(&mut shell, Choice::Rock);

        let start = std::time::Instant::now();
        assert!(!shell.poll_reveal());
        assert!(start.elapsed() < Duration::from_millis(500));
        assert!(!shell.is_revealed());

        // Leaving during the pause is allowed
        shell.on_new_player();
        assert_eq!(shell.engine().phase(), Phase::AwaitingName);
    }

    #[test]
    fn test_rematch_before_reveal_is_safe() {
        let mut shell = shell(&[Choice::Rock; 6]);
        shell.on_name("Ava");
        play_out(&mut shell, Choice::Rock);

        // Leave before the timer fires
        shell.on_rematch();
        assert_eq!(shell.engine().phase(), Phase::RoundInProgress);
        assert!(!shell.is_revealed());

        // Polling outside Finished never reveals
        std::thread::sleep(Duration::from_millis(20));
        assert!(!shell.poll_reveal());
        assert_eq!(shell.engine().state().scores(), Scores::new());
    }

    #[test]
    fn test_new_player_resets() {
        let mut shell = shell(&[Choice::Paper; 3]);
        shell.on_name("Ava");
        play_out(&mut shell, Choice::Rock);
        assert!(reveal(&mut shell));
        shell.on_new_player();

        assert_eq!(shell.engine().phase(), Phase::AwaitingName);
        assert!(shell.on_name("Bo"));
        assert_eq!(shell.engine().state().player_name(), "Bo");
    }

    #[test]
    fn test_out_of_order_intents_ignored() {
        let mut shell = shell(&[]);
        shell.on_choice(Choice::Rock);
        shell.on_next();
        shell.on_rematch();
        assert_eq!(shell.engine().phase(), Phase::AwaitingName);
    }
}
