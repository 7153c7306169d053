mod cold_shooting;
mod foul_trouble;
mod hot_shooting;
mod turnovers;

pub use cold_shooting::ColdShootingRule;
pub use foul_trouble::FoulTroubleRule;
pub use hot_shooting::HotShootingRule;
pub use turnovers::TurnoverRule;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsightThresholds {
    pub cold_min_attempts: u32,
    /// Two point percentage strictly below this is "cold".
    pub cold_max_percentage: f64,
    pub hot_min_attempts: u32,
    /// Three point percentage strictly above this is "hot".
    pub hot_min_percentage: f64,
    pub turnover_limit: u32,
    pub foul_limit: u32,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            cold_min_attempts: 5,
            cold_max_percentage: 30.0,
            hot_min_attempts: 3,
            hot_min_percentage: 50.0,
            turnover_limit: 3,
            foul_limit: 4,
        }
    }
}
