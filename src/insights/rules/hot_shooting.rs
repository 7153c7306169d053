use crate::game::RosterPlayer;
use crate::insights::{rule_order, InsightRule};
use crate::stats::{shooting_split, PlayerStat};

use super::InsightThresholds;

pub struct HotShootingRule {
    min_attempts: u32,
    min_percentage: f64,
}

impl Default for HotShootingRule {
    fn default() -> Self {
        Self::new(&InsightThresholds::default())
    }
}

impl HotShootingRule {
    pub fn new(thresholds: &InsightThresholds) -> Self {
        Self {
            min_attempts: thresholds.hot_min_attempts,
            min_percentage: thresholds.hot_min_percentage,
        }
    }
}

impl InsightRule for HotShootingRule {
    fn evaluate(&self, player: &RosterPlayer, stats: &PlayerStat) -> Option<String> {
        let line = shooting_split(stats).three_point;
        let pct = line.percentage();
        if line.attempted >= self.min_attempts && pct > self.min_percentage {
            Some(format!(
                "{} is hot from 3PT range ({:.1}%). Look for more opportunities beyond the arc.",
                player.name, pct
            ))
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "hot_shooting"
    }

    fn order(&self) -> u32 {
        rule_order::HOT_SHOOTING
    }
}
