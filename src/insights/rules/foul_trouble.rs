use crate::game::RosterPlayer;
use crate::insights::{rule_order, InsightRule};
use crate::stats::PlayerStat;

use super::InsightThresholds;

pub struct FoulTroubleRule {
    limit: u32,
}

impl Default for FoulTroubleRule {
    fn default() -> Self {
        Self::new(&InsightThresholds::default())
    }
}

impl FoulTroubleRule {
    pub fn new(thresholds: &InsightThresholds) -> Self {
        Self {
            limit: thresholds.foul_limit,
        }
    }
}

impl InsightRule for FoulTroubleRule {
    fn evaluate(&self, player: &RosterPlayer, stats: &PlayerStat) -> Option<String> {
        (stats.foul >= self.limit).then(|| {
            format!(
                "⚠️ {} has {} fouls. Consider substitution to avoid fouling out.",
                player.name, stats.foul
            )
        })
    }

    fn name(&self) -> &'static str {
        "foul_trouble"
    }

    fn order(&self) -> u32 {
        rule_order::FOUL_TROUBLE
    }
}
