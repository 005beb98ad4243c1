use crate::logic::board::DEFAULT_BOARD_SIZE;
use crate::logic::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_BOARD_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub human_first: bool,
    /// Emit one trace line per search branch.
    pub debug: bool,
    pub players: [Player; 2],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            human_first: true,
            debug: false,
            players: Player::default_pair(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board size must be at least 2, got {0}")]
    BoardTooSmall(usize),
    #[error("both players use the label '{0}'")]
    DuplicateLabel(char),
    #[error("'{0}' marks an empty cell and cannot be a player label")]
    ReservedLabel(char),
    #[error("player weights {first} and {second} must be non-zero with opposite signs")]
    WeightsNotOpposed { first: i32, second: i32 },
}

impl EngineConfig {
    /// Reads a partial JSON document on top of the defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }

        let [first, second] = &self.players;
        for player in &self.players {
            if matches!(player.label, '.' | '_' | ' ') {
                return Err(ConfigError::ReservedLabel(player.label));
            }
        }
        if first.label == second.label {
            return Err(ConfigError::DuplicateLabel(first.label));
        }
        if first.score.signum() * second.score.signum() != -1 {
            return Err(ConfigError::WeightsNotOpposed {
                first: first.score,
                second: second.score,
            });
        }
        Ok(())
    }
}
