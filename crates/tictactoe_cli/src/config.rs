//! Front end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// How the board is drawn.
    #[serde(default)]
    display: DisplayConfig,
}

/// `[display]` table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Mark drawn for player X.
    #[serde(default = "default_x_mark")]
    x_mark: char,

    /// Mark drawn for player O.
    #[serde(default = "default_o_mark")]
    o_mark: char,

    /// Draw empty squares as their index (otherwise a blank).
    #[serde(default = "default_show_indices")]
    show_indices: bool,
}

fn default_x_mark() -> char {
    'X'
}

fn default_o_mark() -> char {
    'O'
}

fn default_show_indices() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            x_mark: default_x_mark(),
            o_mark: default_o_mark(),
            show_indices: default_show_indices(),
        }
    }
}

impl DisplayConfig {
    /// Returns the mark configured for a player.
    pub fn mark(&self, player: Player) -> char {
        match player {
            Player::X => self.x_mark,
            Player::O => self.o_mark,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            x_mark = %config.display.x_mark,
            o_mark = %config.display.o_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file when one is given, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.x_mark == display.o_mark {
            return Err(ConfigError::new(format!(
                "x_mark and o_mark must differ (both are '{}')",
                display.x_mark
            )));
        }
        if display.x_mark.is_whitespace() || display.o_mark.is_whitespace() {
            return Err(ConfigError::new("marks must be visible characters"));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
