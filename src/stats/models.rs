use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::{scoring, StatsError};

/// The closed set of per-player counters tracked during a game.
///
/// Kinds parse from their camelCase key and from the short keys used by the
/// legacy save format (`2PT_MADE`, `REB_OFF`, ...), so persisted data and
/// tap-panel identifiers resolve to the same variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    #[strum(to_string = "points", serialize = "PTS")]
    Points,
    #[strum(to_string = "twoPointMade", serialize = "2PT_MADE")]
    TwoPointMade,
    #[strum(to_string = "twoPointMiss", serialize = "2PT_MISS")]
    TwoPointMiss,
    #[strum(to_string = "threePointMade", serialize = "3PT_MADE")]
    ThreePointMade,
    #[strum(to_string = "threePointMiss", serialize = "3PT_MISS")]
    ThreePointMiss,
    #[strum(to_string = "freeThrowMade", serialize = "FT_MADE")]
    FreeThrowMade,
    #[strum(to_string = "freeThrowMiss", serialize = "FT_MISS")]
    FreeThrowMiss,
    #[strum(to_string = "reboundOffense", serialize = "REB_OFF")]
    ReboundOffense,
    #[strum(to_string = "reboundDefense", serialize = "REB_DEF")]
    ReboundDefense,
    #[strum(to_string = "assist", serialize = "AST")]
    Assist,
    #[strum(to_string = "steal", serialize = "STL")]
    Steal,
    #[strum(to_string = "block", serialize = "BLK")]
    Block,
    #[strum(to_string = "turnover", serialize = "TO")]
    Turnover,
    #[strum(to_string = "foul", serialize = "FOUL")]
    Foul,
}

impl StatKind {
    /// Resolves a stat key, mapping unknown keys to `InvalidStatKind`.
    pub fn parse(key: &str) -> Result<Self, StatsError> {
        StatKind::from_str(key.trim()).map_err(|_| StatsError::InvalidStatKind(key.to_string()))
    }

    /// Points credited per unit of this kind. Zero for everything but made shots.
    pub fn point_value(self) -> u32 {
        match self {
            StatKind::TwoPointMade => scoring::TWO_POINT_VALUE,
            StatKind::ThreePointMade => scoring::THREE_POINT_VALUE,
            StatKind::FreeThrowMade => scoring::FREE_THROW_VALUE,
            _ => 0,
        }
    }

    pub fn is_made_shot(self) -> bool {
        self.point_value() > 0
    }

    pub fn is_missed_shot(self) -> bool {
        matches!(
            self,
            StatKind::TwoPointMiss | StatKind::ThreePointMiss | StatKind::FreeThrowMiss
        )
    }
}

/// Cumulative counters for one player in one game.
///
/// `points` is derived from the made-shot counters and is only ever changed
/// together with them, see [`crate::stats::apply_stat_event`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub points: u32,
    pub two_point_made: u32,
    pub two_point_miss: u32,
    pub three_point_made: u32,
    pub three_point_miss: u32,
    pub free_throw_made: u32,
    pub free_throw_miss: u32,
    pub rebound_offense: u32,
    pub rebound_defense: u32,
    pub assist: u32,
    pub steal: u32,
    pub block: u32,
    pub turnover: u32,
    pub foul: u32,
}

impl PlayerStat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Points => self.points,
            StatKind::TwoPointMade => self.two_point_made,
            StatKind::TwoPointMiss => self.two_point_miss,
            StatKind::ThreePointMade => self.three_point_made,
            StatKind::ThreePointMiss => self.three_point_miss,
            StatKind::FreeThrowMade => self.free_throw_made,
            StatKind::FreeThrowMiss => self.free_throw_miss,
            StatKind::ReboundOffense => self.rebound_offense,
            StatKind::ReboundDefense => self.rebound_defense,
            StatKind::Assist => self.assist,
            StatKind::Steal => self.steal,
            StatKind::Block => self.block,
            StatKind::Turnover => self.turnover,
            StatKind::Foul => self.foul,
        }
    }

    pub(crate) fn counter_mut(&mut self, kind: StatKind) -> &mut u32 {
        match kind {
            StatKind::Points => &mut self.points,
            StatKind::TwoPointMade => &mut self.two_point_made,
            StatKind::TwoPointMiss => &mut self.two_point_miss,
            StatKind::ThreePointMade => &mut self.three_point_made,
            StatKind::ThreePointMiss => &mut self.three_point_miss,
            StatKind::FreeThrowMade => &mut self.free_throw_made,
            StatKind::FreeThrowMiss => &mut self.free_throw_miss,
            StatKind::ReboundOffense => &mut self.rebound_offense,
            StatKind::ReboundDefense => &mut self.rebound_defense,
            StatKind::Assist => &mut self.assist,
            StatKind::Steal => &mut self.steal,
            StatKind::Block => &mut self.block,
            StatKind::Turnover => &mut self.turnover,
            StatKind::Foul => &mut self.foul,
        }
    }

    // The sums below saturate. Records built through `apply_stat_event`
    // never reach the cap; hand-edited saved data might.

    pub fn rebounds(&self) -> u32 {
        self.rebound_offense.saturating_add(self.rebound_defense)
    }

    pub fn misses(&self) -> u32 {
        self.two_point_miss
            .saturating_add(self.three_point_miss)
            .saturating_add(self.free_throw_miss)
    }

    /// Points recomputed from the made-shot counters.
    pub fn scored_points(&self) -> u32 {
        scoring::TWO_POINT_VALUE
            .saturating_mul(self.two_point_made)
            .saturating_add(scoring::THREE_POINT_VALUE.saturating_mul(self.three_point_made))
            .saturating_add(scoring::FREE_THROW_VALUE.saturating_mul(self.free_throw_made))
    }

    /// Whether attempts per category, field goal attempts, misses and
    /// rebounds all fit in a `u32`.
    pub(crate) fn derived_sums_fit(&self) -> bool {
        let two = self.two_point_made.checked_add(self.two_point_miss);
        let three = self.three_point_made.checked_add(self.three_point_miss);
        let field_goals = two.zip(three).and_then(|(two, three)| two.checked_add(three));
        let free_throws = self.free_throw_made.checked_add(self.free_throw_miss);
        let misses = self
            .two_point_miss
            .checked_add(self.three_point_miss)
            .and_then(|m| m.checked_add(self.free_throw_miss));
        let rebounds = self.rebound_offense.checked_add(self.rebound_defense);

        field_goals.is_some() && free_throws.is_some() && misses.is_some() && rebounds.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ShotCategory {
    #[strum(to_string = "2PT")]
    TwoPoint,
    #[strum(to_string = "3PT")]
    ThreePoint,
    #[strum(to_string = "FT")]
    FreeThrow,
}

impl ShotCategory {
    pub fn made_kind(self) -> StatKind {
        match self {
            ShotCategory::TwoPoint => StatKind::TwoPointMade,
            ShotCategory::ThreePoint => StatKind::ThreePointMade,
            ShotCategory::FreeThrow => StatKind::FreeThrowMade,
        }
    }

    pub fn miss_kind(self) -> StatKind {
        match self {
            ShotCategory::TwoPoint => StatKind::TwoPointMiss,
            ShotCategory::ThreePoint => StatKind::ThreePointMiss,
            ShotCategory::FreeThrow => StatKind::FreeThrowMiss,
        }
    }
}

/// Makes and attempts for one shot category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotLine {
    pub made: u32,
    pub attempted: u32,
}

impl ShotLine {
    pub fn new(made: u32, miss: u32) -> Self {
        Self {
            made,
            attempted: made.saturating_add(miss),
        }
    }

    /// Make percentage in `0.0..=100.0`; `0.0` when nothing was attempted.
    pub fn percentage(&self) -> f64 {
        super::percentage(self.made, self.attempted)
    }

    pub fn combine(self, other: ShotLine) -> ShotLine {
        ShotLine {
            made: self.made.saturating_add(other.made),
            attempted: self.attempted.saturating_add(other.attempted),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootingSplit {
    pub two_point: ShotLine,
    pub three_point: ShotLine,
    pub free_throw: ShotLine,
}

impl ShootingSplit {
    pub fn line(&self, category: ShotCategory) -> ShotLine {
        match category {
            ShotCategory::TwoPoint => self.two_point,
            ShotCategory::ThreePoint => self.three_point,
            ShotCategory::FreeThrow => self.free_throw,
        }
    }

    /// Two and three point attempts combined.
    pub fn field_goals(&self) -> ShotLine {
        self.two_point.combine(self.three_point)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTotals {
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
}
