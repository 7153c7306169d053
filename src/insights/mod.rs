pub mod engine;
pub mod log;
pub mod recommendations;
pub mod rules;

pub use engine::{FiredInsight, InsightEngine, InsightEngineBuilder};
pub use log::InsightLog;
pub use recommendations::{
    recommendations, recommendations_with, RecommendationThresholds, TeamProfile,
};
pub use rules::InsightThresholds;

use crate::game::RosterPlayer;
use crate::stats::PlayerStat;

/// Most recent insights kept per game.
pub const DEFAULT_LOG_CAPACITY: usize = 5;

/// Evaluation order of the built-in rules. Lower values are checked first.
pub mod rule_order {
    pub const COLD_SHOOTING: u32 = 100;
    pub const HOT_SHOOTING: u32 = 200;
    pub const TURNOVERS: u32 = 300;
    pub const FOUL_TROUBLE: u32 = 400;
}

/// A threshold check run against a player's cumulative record after every
/// stat event. Returns the coaching message when the threshold is crossed.
pub trait InsightRule: Send + Sync {
    fn evaluate(&self, player: &RosterPlayer, stats: &PlayerStat) -> Option<String>;

    fn name(&self) -> &'static str;

    fn order(&self) -> u32;
}
