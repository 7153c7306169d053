use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::debug;

use super::rules::{ColdShootingRule, FoulTroubleRule, HotShootingRule, TurnoverRule};
use super::{InsightLog, InsightRule, InsightThresholds};
use crate::game::RosterPlayer;
use crate::stats::PlayerStat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredInsight {
    pub rule: &'static str,
    pub message: String,
}

/// Runs the insight rules after each stat event and surfaces at most one
/// message per event.
///
/// Every rule is checked independently; when several fire, one is picked
/// uniformly at random with the engine's own generator. Seed it with
/// [`InsightEngineBuilder::with_seed`] for reproducible picks.
pub struct InsightEngine {
    rules: Vec<Arc<dyn InsightRule>>,
    rng: StdRng,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::builder(&InsightThresholds::default()).build()
    }
}

impl InsightEngine {
    pub fn builder(thresholds: &InsightThresholds) -> InsightEngineBuilder {
        InsightEngineBuilder::new(thresholds)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::builder(&InsightThresholds::default())
            .with_seed(seed)
            .build()
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// The deterministic part: every rule that fires for this record, in
    /// rule order.
    pub fn evaluate(&self, player: &RosterPlayer, stats: &PlayerStat) -> Vec<FiredInsight> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.evaluate(player, stats).map(|message| FiredInsight {
                    rule: rule.name(),
                    message,
                })
            })
            .collect()
    }

    /// Evaluates the rules and appends one fired message to `log`.
    ///
    /// Only one message is surfaced even when several rules fire, so a single
    /// tap never floods the log. Returns the appended message.
    pub fn generate(
        &mut self,
        player: &RosterPlayer,
        stats: &PlayerStat,
        log: &mut InsightLog,
    ) -> Option<String> {
        let mut fired = self.evaluate(player, stats);
        if fired.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..fired.len());
        let chosen = fired.swap_remove(index);
        debug!(
            player = %player.name,
            rule = chosen.rule,
            candidates = fired.len() + 1,
            "Insight generated"
        );

        log.push(chosen.message.clone());
        Some(chosen.message)
    }
}

pub struct InsightEngineBuilder {
    rules: Vec<Arc<dyn InsightRule>>,
    seed: Option<u64>,
}

impl InsightEngineBuilder {
    fn new(thresholds: &InsightThresholds) -> Self {
        Self {
            rules: vec![
                Arc::new(ColdShootingRule::new(thresholds)),
                Arc::new(HotShootingRule::new(thresholds)),
                Arc::new(TurnoverRule::new(thresholds)),
                Arc::new(FoulTroubleRule::new(thresholds)),
            ],
            seed: None,
        }
    }

    pub fn with_rule(mut self, rule: Arc<dyn InsightRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(mut self) -> InsightEngine {
        self.rules.sort_by_key(|rule| rule.order());
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        InsightEngine {
            rules: self.rules,
            rng,
        }
    }
}
