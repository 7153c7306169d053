use crate::game::RosterPlayer;
use crate::insights::{rule_order, InsightRule};
use crate::stats::PlayerStat;

use super::InsightThresholds;

pub struct TurnoverRule {
    limit: u32,
}

impl Default for TurnoverRule {
    fn default() -> Self {
        Self::new(&InsightThresholds::default())
    }
}

impl TurnoverRule {
    pub fn new(thresholds: &InsightThresholds) -> Self {
        Self {
            limit: thresholds.turnover_limit,
        }
    }
}

impl InsightRule for TurnoverRule {
    fn evaluate(&self, player: &RosterPlayer, stats: &PlayerStat) -> Option<String> {
        (stats.turnover >= self.limit).then(|| {
            format!(
                "{} has {} turnovers. Consider adjusting ball-handling responsibilities.",
                player.name, stats.turnover
            )
        })
    }

    fn name(&self) -> &'static str {
        "turnovers"
    }

    fn order(&self) -> u32 {
        rule_order::TURNOVERS
    }
}
