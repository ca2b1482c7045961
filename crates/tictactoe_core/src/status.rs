//! Read-only projections of a session for whoever draws it.

use crate::{GameSession, Outcome, Phase, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The line of text under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLine {
    /// Game still open; shows whose turn it is.
    Turn(Player),
    /// Game won.
    Won(Player),
    /// Game drawn.
    Draw,
}

impl StatusLine {
    /// Projects the session.
    ///
    /// A pending session still reports the turn: X is up once it starts.
    #[instrument(skip(session))]
    pub fn of(session: &GameSession) -> Self {
        match session.outcome() {
            Outcome::Win(player) => StatusLine::Won(player),
            Outcome::Draw => StatusLine::Draw,
            Outcome::InProgress => StatusLine::Turn(session.next_player()),
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLine::Turn(player) => write!(f, "Turn: {}", player),
            StatusLine::Won(player) => write!(f, "{} wins!", player),
            StatusLine::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// The single action button shown beside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionButton {
    /// Offered before the first game.
    StartNewGame,
    /// Offered once a game has started.
    Restart,
}

impl ActionButton {
    /// Picks the button for the session.
    pub fn of(session: &GameSession) -> Self {
        if session.is_started() {
            ActionButton::Restart
        } else {
            ActionButton::StartNewGame
        }
    }

    /// Button text.
    pub fn label(self) -> &'static str {
        match self {
            ActionButton::StartNewGame => "Start New Game",
            ActionButton::Restart => "Restart",
        }
    }

    /// Performs the button's action on the session.
    #[instrument(skip(session))]
    pub fn press(self, session: &mut GameSession) {
        match self {
            ActionButton::StartNewGame => session.start(),
            ActionButton::Restart => session.restart(),
        }
    }
}

/// Whether board clicks should be enabled.
pub fn accepts_moves(session: &GameSession) -> bool {
    session.phase() == Phase::Active
}
