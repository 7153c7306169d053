use crate::game::RosterPlayer;
use crate::insights::{rule_order, InsightRule};
use crate::stats::{shooting_split, PlayerStat};

use super::InsightThresholds;

/// Fires when a player keeps missing two point shots.
pub struct ColdShootingRule {
    min_attempts: u32,
    max_percentage: f64,
}

impl Default for ColdShootingRule {
    fn default() -> Self {
        Self::new(&InsightThresholds::default())
    }
}

impl ColdShootingRule {
    pub fn new(thresholds: &InsightThresholds) -> Self {
        Self {
            min_attempts: thresholds.cold_min_attempts,
            max_percentage: thresholds.cold_max_percentage,
        }
    }
}

impl InsightRule for ColdShootingRule {
    fn evaluate(&self, player: &RosterPlayer, stats: &PlayerStat) -> Option<String> {
        let line = shooting_split(stats).two_point;
        let pct = line.percentage();
        if line.attempted >= self.min_attempts && pct < self.max_percentage {
            Some(format!(
                "{} is struggling with 2PT shots ({:.1}%). Consider running plays for better shot selection.",
                player.name, pct
            ))
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "cold_shooting"
    }

    fn order(&self) -> u32 {
        rule_order::COLD_SHOOTING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::rules::test_support::{player, stats};
    use crate::stats::StatKind;

    #[test]
    fn fires_on_one_for_six() {
        let rule = ColdShootingRule::default();
        let record = stats(&[(StatKind::TwoPointMade, 1), (StatKind::TwoPointMiss, 5)]);

        let message = rule.evaluate(&player("Jo"), &record).unwrap();
        assert_eq!(
            message,
            "Jo is struggling with 2PT shots (16.7%). Consider running plays for better shot selection."
        );
    }

    #[test]
    fn needs_five_attempts() {
        let rule = ColdShootingRule::default();
        let record = stats(&[(StatKind::TwoPointMiss, 4)]);
        assert!(rule.evaluate(&player("Jo"), &record).is_none());
    }

    #[test]
    fn thirty_percent_is_not_cold() {
        let rule = ColdShootingRule::default();
        let record = stats(&[(StatKind::TwoPointMade, 3), (StatKind::TwoPointMiss, 7)]);
        assert!(rule.evaluate(&player("Jo"), &record).is_none());
    }
}
