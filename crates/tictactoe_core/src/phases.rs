//! Session phases and board outcomes.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Not started yet; the board is empty and moves are refused.
    Pending,
    /// Moves are being accepted.
    Active,
    /// The board is won or drawn.
    Terminal,
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    #[default]
    InProgress,
    /// A player holds a full line.
    Win(Player),
    /// Every square is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns true once the board is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
