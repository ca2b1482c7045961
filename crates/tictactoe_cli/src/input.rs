//! Parsing of typed commands.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_core::Position;

/// A line of user input, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Press "Start New Game".
    Start,
    /// Press "Restart".
    Restart,
    /// Click the square at this index.
    Move(usize),
    /// Redraw the board.
    Show,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

/// Input that does not decode to a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}' (type 'help' for commands)", input)]
pub struct ParseCommandError {
    /// The offending input, trimmed.
    pub input: String,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  start            start a new game
  restart          throw the game away and start again
  move <square>    mark a square (0-8 or a name like 'center')
  <0-8>            same as move
  show             redraw the board
  help             this text
  quit             leave";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || ParseCommandError {
            input: input.to_string(),
        };
        let lower = input.to_ascii_lowercase();
        let mut words = lower.split_whitespace();

        let command = match (words.next(), words.next()) {
            (Some("start" | "new"), None) => Command::Start,
            (Some("restart"), None) => Command::Restart,
            (Some("show" | "board"), None) => Command::Show,
            (Some("help" | "?"), None) => Command::Help,
            (Some("quit" | "exit" | "q"), None) => Command::Quit,
            (Some("move" | "m"), Some(target)) if words.next().is_none() => {
                Command::Move(parse_square(target).ok_or_else(err)?)
            }
            (Some(word), None) if word.chars().all(|c| c.is_ascii_digit()) => {
                Command::Move(word.parse().map_err(|_| err())?)
            }
            _ => return Err(err()),
        };
        Ok(command)
    }
}

/// Decodes a square as an index or a position name.
///
/// Numbers past 8 are kept so the session can report them as out of bounds.
fn parse_square(target: &str) -> Option<usize> {
    target
        .parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(target).map(Position::to_index))
}
