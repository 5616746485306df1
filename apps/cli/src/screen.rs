//! # Tip Screen
//!
//! The single screen of Tip Time, driven by lines of text instead of taps.
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cost of Service  [ 50          ]   ◄── any line that is not a command │
//! │                                                                         │
//! │  How was the service?                                                  │
//! │    ( ) Amazing (20%)                ◄── rate 20                         │
//! │    ( ) Good (18%)                   ◄── rate 18                         │
//! │    (•) OK (15%)                     ◄── rate 15                         │
//! │                                                                         │
//! │  Round up tip?  [ on / off ]        ◄── round, round on, round off      │
//! │                                                                         │
//! │  Tip Amount: $7.50                  ◄── printed after every event       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every accepted line is one event and recomputes the tip, the same way
//! pressing Enter or Calculate does on a phone.

use std::io::{BufRead, Write};
use tiptime_core::{calculate, CurrencyFormat, TipRate, TipRequest, TipResult};
use tracing::debug;

use crate::config::{parse_flag, Settings};
use crate::error::{AppError, AppResult};

const HELP: &str = "\
Enter a cost of service to calculate the tip.
  rate 20|18|15     choose the tip percentage
  round [on|off]    toggle or set rounding up
  help              show this text
  quit              leave";

// =============================================================================
// Commands
// =============================================================================

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New text for the cost field.
    Cost(String),

    /// A tip option was selected.
    Rate(TipRate),

    /// The round-up switch: `None` flips it, `Some` sets it.
    RoundUp(Option<bool>),

    Help,
    Quit,
}

impl Command {
    /// Parses a line. Anything that is not a keyword goes to the cost field.
    pub fn parse(line: &str) -> AppResult<Command> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_lowercase();
        let argument = words.next();

        if words.next().is_some() && is_keyword(&keyword) {
            return Err(AppError::InvalidCommand(format!(
                "'{}' takes at most one argument",
                keyword
            )));
        }

        match (keyword.as_str(), argument) {
            ("quit" | "exit" | "q", None) => Ok(Command::Quit),
            ("help" | "?", None) => Ok(Command::Help),
            ("rate", Some(value)) => Ok(Command::Rate(value.parse()?)),
            ("rate", None) => Err(AppError::InvalidCommand(
                "usage: rate 20|18|15".to_string(),
            )),
            ("round", None) => Ok(Command::RoundUp(None)),
            ("round", Some(value)) => parse_flag(value)
                .map(|flag| Command::RoundUp(Some(flag)))
                .ok_or_else(|| AppError::InvalidCommand("usage: round [on|off]".to_string())),
            _ => Ok(Command::Cost(line.to_string())),
        }
    }
}

fn is_keyword(word: &str) -> bool {
    matches!(word, "quit" | "exit" | "q" | "help" | "?" | "rate" | "round")
}

// =============================================================================
// Screen State
// =============================================================================

/// What the screen currently shows.
#[derive(Debug, Clone)]
pub struct TipScreen {
    cost_text: String,
    rate: TipRate,
    round_up: bool,
    format: CurrencyFormat,
}

impl TipScreen {
    /// Creates the screen with an empty cost field.
    pub fn new(settings: Settings) -> Self {
        TipScreen {
            cost_text: String::new(),
            rate: settings.rate,
            round_up: settings.round_up,
            format: settings.format,
        }
    }

    pub fn rate(&self) -> TipRate {
        self.rate
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    /// Applies one input event and returns the recomputed tip.
    ///
    /// `Help` and `Quit` do not touch the screen and return `None`.
    pub fn apply(&mut self, command: Command) -> Option<TipResult> {
        match command {
            Command::Cost(text) => self.cost_text = text,
            Command::Rate(rate) => self.rate = rate,
            Command::RoundUp(Some(flag)) => self.round_up = flag,
            Command::RoundUp(None) => self.round_up = !self.round_up,
            Command::Help | Command::Quit => return None,
        }

        Some(self.calculate())
    }

    /// Computes the tip for what is on screen now.
    pub fn calculate(&self) -> TipResult {
        let request = TipRequest::new(self.cost_text.clone(), self.rate, self.round_up);
        let result = calculate(&request, &self.format);
        debug!(
            cost = %request.cost_text,
            rate = %request.rate,
            round_up = request.round_up,
            tip = %result.tip,
            "Tip calculated"
        );
        result
    }

    fn status(&self) -> String {
        format!(
            "Tip {}, round up {}",
            self.rate,
            if self.round_up { "on" } else { "off" }
        )
    }
}

// =============================================================================
// Session Loop
// =============================================================================

/// Runs the screen until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    screen: &mut TipScreen,
    input: R,
    mut output: W,
) -> AppResult<()> {
    writeln!(output, "Tip Time. {}. Type 'help' for commands.", screen.status())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(command) => {
                let shows_status = !matches!(command, Command::Cost(_));
                if let Some(result) = screen.apply(command) {
                    if shows_status {
                        writeln!(output, "{}", screen.status())?;
                    }
                    writeln!(output, "{}", result.display)?;
                }
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
        output.flush()?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
