//! Game configuration.

use crate::games::xo::{CELL_COUNT, DEFAULT_MAX_CHIPS, Side};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays the second side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "pvp", serialize = "player-vs-player")]
    PlayerVsPlayer,
    /// A human plays against the heuristic bot.
    #[strum(to_string = "bot", serialize = "player-vs-bot")]
    PlayerVsBot,
}

/// How the first round's opening side is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartingSide {
    /// Uniformly at random.
    Random,
    /// Always this side.
    Fixed(Side),
}

/// Settings for a series.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Live chips allowed per side before the oldest is removed.
    #[serde(default = "default_max_chips")]
    max_chips: usize,

    /// Rounds in a series.
    #[serde(default = "default_max_rounds")]
    max_rounds: u32,

    /// Two humans or human against bot.
    #[serde(default)]
    mode: GameMode,

    /// Side the bot plays in bot mode.
    #[serde(default = "default_bot_side")]
    bot_side: Side,

    /// Side that opens round 1. Random when unset, except in bot mode where
    /// the human opens.
    #[serde(default)]
    first_player: Option<Side>,

    /// Pause before the bot moves, in milliseconds. Front ends only.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,
}

#[instrument]
fn default_max_chips() -> usize {
    DEFAULT_MAX_CHIPS
}

#[instrument]
fn default_max_rounds() -> u32 {
    5
}

#[instrument]
fn default_bot_side() -> Side {
    Side::Second
}

#[instrument]
fn default_bot_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_chips: default_max_chips(),
            max_rounds: default_max_rounds(),
            mode: GameMode::default(),
            bot_side: default_bot_side(),
            first_player: None,
            bot_delay_ms: default_bot_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, max_rounds = config.max_rounds, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the engine cannot play with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=CELL_COUNT).contains(&self.max_chips) {
            return Err(ConfigError::new(format!(
                "max_chips must be between 1 and {}, got {}",
                CELL_COUNT, self.max_chips
            )));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::new("max_rounds must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Side the bot plays, or `None` when two humans play.
    pub fn bot(&self) -> Option<Side> {
        match self.mode {
            GameMode::PlayerVsBot => Some(self.bot_side),
            GameMode::PlayerVsPlayer => None,
        }
    }

    /// Rule for the first round's opening side.
    pub fn starting_side(&self) -> StartingSide {
        match (self.first_player, self.bot()) {
            (Some(side), _) => StartingSide::Fixed(side),
            (None, Some(bot)) => StartingSide::Fixed(bot.opponent()),
            (None, None) => StartingSide::Random,
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
