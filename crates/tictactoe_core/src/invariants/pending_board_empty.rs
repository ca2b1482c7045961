//! A session that has not started has nothing on its board.

use super::Invariant;
use crate::GameSession;

/// Invariant: `started == false` implies an empty board.
pub struct PendingBoardEmptyInvariant;

impl Invariant<GameSession> for PendingBoardEmptyInvariant {
    fn holds(session: &GameSession) -> bool {
        session.is_started() || session.board().occupied() == 0
    }

    fn description() -> &'static str {
        "Pending session has an empty board"
    }
}
