use serde::{Deserialize, Serialize};

use crate::game::GameRecord;
use crate::stats::{shooting_split, ShotLine, TeamTotals};

pub const SHOT_SELECTION: &str = "Focus on improving shot selection and finishing at the rim.";
pub const THREE_POINT_PRACTICE: &str = "Work on three-point shooting in practice sessions.";
pub const REBOUNDING: &str = "Increase rebounding drills to improve board control.";
pub const BALL_SECURITY: &str = "Focus on ball security to reduce turnovers.";
pub const BALL_MOVEMENT: &str = "Improve ball movement and player movement off the ball.";

pub const FILLER: [&str; 3] = [
    "Develop more set plays for your most efficient scorers.",
    "Implement more off-ball movement drills to improve scoring opportunities.",
    "Practice late-game situations to improve execution in close games.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationThresholds {
    pub min_field_goal_pct: f64,
    pub min_three_point_pct: f64,
    pub min_rebounds: u32,
    pub max_turnovers: u32,
    pub min_assists: u32,
    /// Below this many triggered checks the generic advice is appended.
    pub min_recommendations: usize,
    pub max_recommendations: usize,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            min_field_goal_pct: 40.0,
            min_three_point_pct: 30.0,
            min_rebounds: 35,
            max_turnovers: 15,
            min_assists: 15,
            min_recommendations: 3,
            max_recommendations: 5,
        }
    }
}

/// Team-wide shooting lines and totals for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub field_goals: ShotLine,
    pub three_point: ShotLine,
    pub free_throw: ShotLine,
    pub totals: TeamTotals,
}

impl TeamProfile {
    pub fn for_game(game: &GameRecord) -> Self {
        let mut profile = game
            .player_stats
            .values()
            .map(shooting_split)
            .fold(TeamProfile::default(), |mut profile, split| {
                profile.field_goals = profile.field_goals.combine(split.field_goals());
                profile.three_point = profile.three_point.combine(split.three_point);
                profile.free_throw = profile.free_throw.combine(split.free_throw);
                profile
            });
        profile.totals = game.team_totals();
        profile
    }

    pub fn field_goal_pct(&self) -> f64 {
        self.field_goals.percentage()
    }

    pub fn three_point_pct(&self) -> f64 {
        self.three_point.percentage()
    }
}

pub fn recommendations(game: &GameRecord) -> Vec<String> {
    recommendations_with(game, &RecommendationThresholds::default())
}

pub fn recommendations_with(
    game: &GameRecord,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let profile = TeamProfile::for_game(game);
    summarize(
        profile.field_goal_pct(),
        profile.three_point_pct(),
        &profile.totals,
        thresholds,
    )
}

/// Ordered threshold checks over team shooting and totals, padded with
/// generic advice when few checks trigger and capped at the maximum.
pub fn summarize(
    field_goal_pct: f64,
    three_point_pct: f64,
    totals: &TeamTotals,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let checks = [
        (field_goal_pct < thresholds.min_field_goal_pct, SHOT_SELECTION),
        (
            three_point_pct < thresholds.min_three_point_pct,
            THREE_POINT_PRACTICE,
        ),
        (totals.rebounds < thresholds.min_rebounds, REBOUNDING),
        (totals.turnovers > thresholds.max_turnovers, BALL_SECURITY),
        (totals.assists < thresholds.min_assists, BALL_MOVEMENT),
    ];

    let mut out: Vec<String> = checks
        .iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, message)| message.to_string())
        .collect();

    if out.len() < thresholds.min_recommendations {
        out.extend(FILLER.iter().map(|message| message.to_string()));
    }

    out.truncate(thresholds.max_recommendations);
    out
}
