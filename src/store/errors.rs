use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;
use crate::game::ClockError;
use crate::stats::StatsError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Game not found: {0}")]
    GameNotFound(Uuid),

    #[error("Player {player_id} not found in game {game_id}")]
    PlayerNotFound { game_id: Uuid, player_id: String },

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Invalid quarter: {0}")]
    InvalidQuarter(u8),

    #[error("Invalid clock: {0}")]
    InvalidClock(#[from] ClockError),

    #[error("Game {0} is already completed")]
    GameCompleted(Uuid),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("Invalid tracker config: {0}")]
    Config(#[from] ConfigError),

    #[error("Persistence error: {0}")]
    Persistence(String),
}
