//! Requests from the presentation layer.

use super::position::Position;
use super::state::GameState;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// A single request against the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Place the next mark at a board cell (0-8).
    Play(usize),
    /// Make the history entry at this index active.
    JumpTo(usize),
    /// Flip the history list order.
    ToggleSort,
}

impl GameState {
    /// Applies a command, returning the next state.
    ///
    /// Rejected commands leave the state unchanged.
    #[instrument(skip(self))]
    pub fn dispatch(self, command: Command) -> Self {
        match command {
            Command::Play(cell) => self.apply_move(cell),
            Command::JumpTo(index) => self.jump_to(index),
            Command::ToggleSort => self.toggle_sort_direction(),
        }
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parses `play <cell>`, `jump <index>` or `sort`.
    ///
    /// `play` also accepts a position label such as `top-left`.
    /// Keywords are case-insensitive and may be separated from their
    /// argument by whitespace or a colon (`play:4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ':')
            .filter(|part| !part.is_empty());

        let keyword = parts
            .next()
            .ok_or_else(|| CommandParseError::new("Empty command".to_string()))?
            .to_lowercase();
        let argument = parts.next();

        if parts.next().is_some() {
            return Err(CommandParseError::new(format!("Too many arguments in '{}'", s)));
        }

        match (keyword.as_str(), argument) {
            ("play" | "p", Some(arg)) => Position::from_label_or_number(arg)
                .map(|pos| Command::Play(pos.to_index()))
                .ok_or_else(|| CommandParseError::new(format!("Invalid position '{}'", arg))),
            ("jump" | "j", Some(arg)) => parse_index(arg).map(Command::JumpTo),
            ("sort" | "s", None) => Ok(Command::ToggleSort),
            ("play" | "p" | "jump" | "j", None) => Err(CommandParseError::new(format!(
                "'{}' needs an index",
                keyword
            ))),
            ("sort" | "s", Some(_)) => Err(CommandParseError::new(
                "'sort' takes no argument".to_string(),
            )),
            _ => Err(CommandParseError::new(format!("Unknown command '{}'", keyword))),
        }
    }
}

fn parse_index(arg: &str) -> Result<usize, CommandParseError> {
    arg.parse::<usize>()
        .map_err(|e| CommandParseError::new(format!("Invalid index '{}': {}", arg, e)))
}

/// Command parsing error.
#[derive(Debug, Clone, Display, Error)]
#[display("Command error: {} at {}:{}", message, file, line)]
pub struct CommandParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandParseError {
    /// Creates a new command parsing error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
