//! Game configuration: grid size, run length, player names, log file.
//!
//! Values come from defaults, then `CONNECT_FOUR_*` environment variables, then
//! whatever the CLI overrides. [`GameConfig::validate`] runs before a game is built.

use std::env;
use std::path::PathBuf;

use crate::types::{DEFAULT_LENGTH, DEFAULT_RUN_LENGTH, DEFAULT_WIDTH, MAX_DIMENSION};

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Values given on the command line. `None` keeps whatever the config already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub width: Option<usize>,
    pub length: Option<usize>,
    pub run_length: Option<usize>,
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub log_path: Option<PathBuf>,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub length: usize,
    pub run_length: usize,
    pub player_names: [String; 2],
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            length: DEFAULT_LENGTH,
            run_length: DEFAULT_RUN_LENGTH,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `CONNECT_FOUR_WIDTH`, `CONNECT_FOUR_LENGTH`, `CONNECT_FOUR_RUN_LENGTH`
    /// - `CONNECT_FOUR_PLAYER1`, `CONNECT_FOUR_PLAYER2`
    /// - `CONNECT_FOUR_LOG_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable numbers keep their defaults and
    /// blank strings are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, fallback: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(fallback)
        };
        let text = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let [p1, p2] = defaults.player_names;
        Self {
            width: number("CONNECT_FOUR_WIDTH", defaults.width),
            length: number("CONNECT_FOUR_LENGTH", defaults.length),
            run_length: number("CONNECT_FOUR_RUN_LENGTH", defaults.run_length),
            player_names: [
                text("CONNECT_FOUR_PLAYER1").unwrap_or(p1),
                text("CONNECT_FOUR_PLAYER2").unwrap_or(p2),
            ],
            log_path: text("CONNECT_FOUR_LOG_PATH").map(PathBuf::from),
        }
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        let ConfigOverrides {
            width,
            length,
            run_length,
            player1,
            player2,
            log_path,
        } = overrides;

        self.width = width.unwrap_or(self.width);
        self.length = length.unwrap_or(self.length);
        self.run_length = run_length.unwrap_or(self.run_length);
        let [p1, p2] = &mut self.player_names;
        if let Some(name) = player1 {
            *p1 = name;
        }
        if let Some(name) = player2 {
            *p2 = name;
        }
        if log_path.is_some() {
            self.log_path = log_path;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.width) {
            return Err(ConfigError::Validation(format!(
                "width must be in 1..={MAX_DIMENSION}, got {}",
                self.width
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.length) {
            return Err(ConfigError::Validation(format!(
                "length must be in 1..={MAX_DIMENSION}, got {}",
                self.length
            )));
        }
        let longest = self.width.max(self.length);
        if !(1..=longest).contains(&self.run_length) {
            return Err(ConfigError::Validation(format!(
                "run length must be in 1..={longest}, got {}",
                self.run_length
            )));
        }
        if let Some(i) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "player {} name must not be blank",
                i + 1
            )));
        }
        Ok(())
    }
}
