//! At most one player can hold a completed line.

use super::Invariant;
use crate::rules::LINES;
use crate::{GameSession, Player, Square};

/// Invariant: completed lines never belong to both players.
///
/// Play stops at the first completed line, so a board where X and O both
/// own a line cannot be reached through accepted moves.
pub struct SingleWinnerInvariant;

impl Invariant<GameSession> for SingleWinnerInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let owns_line = |player: Player| {
            LINES
                .iter()
                .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)))
        };
        !(owns_line(Player::X) && owns_line(Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a completed line"
    }
}
