//! Tic-tac-toe session core.
//!
//! A [`GameSession`] holds one game: the board, whose turn it is, and
//! whether play has started. Moves go through [`GameSession::apply_move`],
//! which checks the move, places the mark and re-evaluates the board with
//! the pure [`evaluate`] function. Everything a front end needs to draw
//! comes from [`GameSession::snapshot`] and the projections in [`status`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! session.start();
//! for index in [0, 4, 1, 3] {
//!     session.apply_move(index).unwrap();
//! }
//! assert_eq!(session.apply_move(2), Ok(Outcome::Win(Player::X)));
//! assert!(session.apply_move(8).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod phases;
mod position;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod status;

pub use error::MoveRejection;
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use rules::evaluate;
pub use session::{GameSession, Snapshot};
pub use status::{accepts_moves, ActionButton, StatusLine};
pub use types::{Board, Player, Square};
