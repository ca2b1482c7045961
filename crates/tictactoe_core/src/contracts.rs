//! Preconditions for applying a move.
//!
//! Each check is a small named rule; [`LegalMove`] composes them in the
//! order a caller should hear about failures: lifecycle first, then the
//! index, then the square.

use crate::{GameSession, MoveRejection, Phase, Position};
use tracing::instrument;

/// Precondition: the session must be accepting moves.
pub struct SessionIsActive;

impl SessionIsActive {
    /// Fails with [`MoveRejection::NotStarted`] or [`MoveRejection::GameOver`].
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveRejection> {
        match session.phase() {
            Phase::Active => Ok(()),
            Phase::Pending => Err(MoveRejection::NotStarted),
            Phase::Terminal => Err(MoveRejection::GameOver),
        }
    }
}

/// Precondition: the index must name one of the nine squares.
pub struct IndexInBounds;

impl IndexInBounds {
    /// Resolves the index into a [`Position`].
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveRejection> {
        Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))
    }
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveRejection::SquareOccupied`].
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &GameSession) -> Result<(), MoveRejection> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: all of the above.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move and returns the square it targets.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &GameSession) -> Result<Position, MoveRejection> {
        SessionIsActive::check(session)?;
        let pos = IndexInBounds::check(index)?;
        SquareIsEmpty::check(pos, session)?;
        Ok(pos)
    }
}
