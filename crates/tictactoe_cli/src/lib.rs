//! Terminal front end for `tictactoe_core`.
//!
//! Plays the part of the rendering layer: it owns one
//! [`GameSession`](tictactoe_core::GameSession), maps typed commands to the
//! session's operations and prints the board with its status line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod render;

pub use app::{App, Flow};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DisplayConfig};
pub use input::{Command, ParseCommandError, HELP};
pub use render::{render_board, render_view};
