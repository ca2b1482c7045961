//! The terminal front end: one session, driven by typed commands.

use crate::config::AppConfig;
use crate::input::{Command, HELP};
use crate::render::render_view;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{ActionButton, GameSession};
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// Owns the session and turns commands into session calls plus output.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    config: AppConfig,
    json: bool,
}

impl App {
    /// Creates an app around a fresh, not yet started session.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig, json: bool) -> Self {
        Self {
            session: GameSession::new(),
            config,
            json,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Executes one command, writing whatever it shows to `out`.
    #[instrument(skip(self, out))]
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Start => {
                ActionButton::StartNewGame.press(&mut self.session);
                self.show(out)?;
            }
            Command::Restart => {
                ActionButton::Restart.press(&mut self.session);
                self.show(out)?;
            }
            Command::Move(index) => match self.session.apply_move(index) {
                Ok(outcome) => {
                    debug!(?outcome, "Move accepted");
                    self.show(out)?;
                }
                Err(rejection) => writeln!(out, "Move rejected: {}", rejection)?,
            },
            Command::Show => self.show(out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        info!("Starting interactive session");
        self.show(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(input = %e.input, "Unrecognized command");
                    writeln!(out, "{}", e)?;
                }
            }
            out.flush()?;
        }

        info!(outcome = ?self.session.outcome(), "Session ended");
        Ok(())
    }

    /// Starts a game, plays the given squares in order, then shows the result.
    ///
    /// Rejected moves are reported and skipped, as they would be in play.
    #[instrument(skip(self, out))]
    pub fn play_script(&mut self, moves: &[usize], out: &mut impl Write) -> Result<()> {
        self.session.start();
        for &index in moves {
            if let Err(rejection) = self.session.apply_move(index) {
                writeln!(out, "Move {} rejected: {}", index, rejection)?;
            }
        }
        self.show(out)
    }

    fn show(&self, out: &mut impl Write) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&self.session.snapshot())?)?;
        } else {
            writeln!(out, "{}\n", render_view(&self.session, self.config.display()))?;
        }
        Ok(())
    }
}
