//! A single game session and its transitions.

use crate::contracts::LegalMove;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::evaluate;
use crate::{Board, MoveRejection, Outcome, Phase, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The state of one game, owned by whoever renders it.
///
/// Only the board, the next player and the started flag are stored. The
/// outcome and the phase are derived from them on every read, so they
/// cannot disagree with the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) next_player: Player,
    pub(crate) started: bool,
}

impl GameSession {
    /// Creates a session in the pre-game state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Player::X,
            started: false,
        }
    }

    /// Starts a new game.
    ///
    /// Whatever came before is discarded: the board is cleared, X moves
    /// first, and moves are accepted immediately.
    #[instrument(skip(self), fields(phase = ?self.phase()))]
    pub fn start(&mut self) {
        *self = Self {
            started: true,
            ..Self::new()
        };
        info!("Game started");
    }

    /// Throws the current game away and starts a fresh one.
    ///
    /// Behaves exactly like [`start`](Self::start); the two names only
    /// mirror the two buttons a front end shows.
    #[instrument(skip(self), fields(phase = ?self.phase(), outcome = ?self.outcome()))]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Places the next player's mark on the square at `index` (0-8).
    ///
    /// On success the turn passes to the other player and the resulting
    /// outcome is returned. A rejected move changes nothing; `.is_ok()` on
    /// the result is the "applied" flag.
    #[instrument(skip(self), fields(player = ?self.next_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveRejection> {
        let pos = LegalMove::check(index, self).inspect_err(|rejection| {
            debug!(%rejection, "Move rejected");
        })?;

        let player = self.next_player;
        self.board.set(pos, Square::Occupied(player));
        self.next_player = player.opponent();

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated after move"
        );

        let outcome = evaluate(&self.board);
        info!(%player, position = %pos, ?outcome, "Move applied");
        Ok(outcome)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns true once a game has been started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of moves made so far.
    pub fn ply(&self) -> usize {
        self.board.occupied()
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Pending
        } else if self.outcome().is_terminal() {
            Phase::Terminal
        } else {
            Phase::Active
        }
    }

    /// Captures a read-only view for rendering.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            next_player: self.next_player,
            started: self.started,
            phase: self.phase(),
            outcome: self.outcome(),
        }
    }
}

/// Read-only copy of a session at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Player to move next.
    next_player: Player,
    /// Whether a game has been started.
    started: bool,
    /// Lifecycle phase.
    phase: Phase,
    /// Classification of the board.
    outcome: Outcome,
}
