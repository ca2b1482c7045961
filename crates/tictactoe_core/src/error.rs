//! Move rejection reasons.

use crate::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was refused.
///
/// Rejections are ordinary UI events (a click on a taken square, a click
/// before the game starts), so they are returned as values and never panic.
/// A rejected move leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Error)]
pub enum MoveRejection {
    /// The game has not been started.
    #[display("Game has not started")]
    NotStarted,

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}
