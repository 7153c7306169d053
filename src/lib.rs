// Library crate for the courtstats basketball scorekeeper
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod dashboard;
pub mod game;
pub mod insights;
pub mod stats;
pub mod store;
pub mod trends;

// Re-export commonly used types for easier access in tests
pub use config::{ConfigError, TrackerConfig};
pub use dashboard::{
    game_history, game_summary, known_players, player_analysis, team_analysis, GameHistoryRow,
    GameSummary, PlayerAnalysis, TeamAnalysis,
};
pub use game::{ClockRunner, ClockTime, GameRecord, GameStatus, RosterPlayer, ScoreSide};
pub use insights::{InsightEngine, InsightLog};
pub use stats::{PlayerStat, StatKind, StatsError};
pub use store::{
    GameStore, GameStoreBuilder, InMemoryStateRepository, JsonFileStateRepository, StoreError,
};
pub use trends::{player_trends, team_trends, PlayerTrends, TeamTrends};
