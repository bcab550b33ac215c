//! Game configuration.
//!
//! The board geometry is fixed; the only tunable is how many barriers each
//! player starts with.

use serde::{Deserialize, Serialize};

/// Barriers each player receives in a standard game.
pub const DEFAULT_BARRIERS_PER_PLAYER: u8 = 10;

/// Upper bound accepted by [`GameConfig::validate`].
pub const MAX_BARRIERS_PER_PLAYER: u8 = 20;

/// Errors that can occur while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("barriers_per_player must be between 1 and {max}, got {got}")]
    BarrierCount { got: u8, max: u8 },
}

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub barriers_per_player: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            barriers_per_player: DEFAULT_BARRIERS_PER_PLAYER,
        }
    }
}

impl GameConfig {
    /// Parses and validates a config from JSON. Missing fields take defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.barriers_per_player == 0 || self.barriers_per_player > MAX_BARRIERS_PER_PLAYER {
            return Err(ConfigError::BarrierCount {
                got: self.barriers_per_player,
                max: MAX_BARRIERS_PER_PLAYER,
            });
        }
        Ok(())
    }
}
