//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: the next player follows from the mark counts.
///
/// X moves on even plies, so X is next when both players hold the same
/// number of marks and O is next when X holds exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let (x, o) = (board.count(Player::X), board.count(Player::O));

        match session.next_player() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
