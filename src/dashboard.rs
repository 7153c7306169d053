//! Read-only views over stored games: history table, player directory,
//! per-game box score and rule-based reading of trend series.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::game::{GameRecord, GameStatus, RosterPlayer};
use crate::insights::{recommendations_with, RecommendationThresholds, TeamProfile};
use crate::stats::{efficiency_score, PlayerStat, ShotLine, TeamTotals};
use crate::trends::{PlayerTrends, TeamTrends};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl GameResult {
    pub fn letter(self) -> &'static str {
        match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameHistoryRow {
    pub game_id: Uuid,
    /// `YYYY-MM-DD` of creation.
    pub date: String,
    pub name: String,
    pub team: String,
    pub opponent: String,
    pub team_score: u32,
    pub opponent_score: u32,
    pub result: GameResult,
    pub status: GameStatus,
}

impl GameHistoryRow {
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.team_score, self.opponent_score)
    }
}

/// One row per game, newest first. Ties count as losses.
pub fn game_history(games: &[GameRecord]) -> Vec<GameHistoryRow> {
    let mut ordered: Vec<&GameRecord> = games.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ordered
        .into_iter()
        .map(|game| GameHistoryRow {
            game_id: game.id,
            date: game.created_at.format("%Y-%m-%d").to_string(),
            name: game.name.clone(),
            team: game.team.clone(),
            opponent: game.opponent.clone(),
            team_score: game.score.team,
            opponent_score: game.score.opponent,
            result: if game.score.is_win() {
                GameResult::Win
            } else {
                GameResult::Loss
            },
            status: game.status,
        })
        .collect()
}

/// Every player seen across `games`, keyed by id. The first roster entry
/// for an id wins.
pub fn known_players(games: &[GameRecord]) -> Vec<RosterPlayer> {
    let mut seen = HashSet::new();
    games
        .iter()
        .flat_map(|game| game.players.iter())
        .filter(|player| seen.insert(player.id.clone()))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBoxLine {
    pub player_id: String,
    pub name: String,
    pub number: String,
    pub is_active: bool,
    pub stats: PlayerStat,
    pub efficiency: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: Uuid,
    pub totals: TeamTotals,
    pub field_goals: ShotLine,
    pub three_point: ShotLine,
    pub free_throw: ShotLine,
    pub recommendations: Vec<String>,
    /// Roster order.
    pub players: Vec<PlayerBoxLine>,
}

pub fn game_summary(game: &GameRecord) -> GameSummary {
    game_summary_with(game, &RecommendationThresholds::default())
}

pub fn game_summary_with(game: &GameRecord, thresholds: &RecommendationThresholds) -> GameSummary {
    let profile = TeamProfile::for_game(game);

    let players = game
        .players
        .iter()
        .map(|player| {
            let stats = game.stats_for(&player.id).copied().unwrap_or_default();
            PlayerBoxLine {
                player_id: player.id.clone(),
                name: player.name.clone(),
                number: player.number.clone(),
                is_active: player.is_active,
                efficiency: efficiency_score(&stats),
                stats,
            }
        })
        .collect();

    GameSummary {
        game_id: game.id,
        totals: profile.totals,
        field_goals: profile.field_goals,
        three_point: profile.three_point,
        free_throw: profile.free_throw,
        recommendations: recommendations_with(game, thresholds),
        players,
    }
}

/// Cut-offs used when reading trend series.
pub mod analysis_thresholds {
    /// Every game's field goal percentage must be above this to count as efficient.
    pub const EFFICIENT_FG_PCT: f64 = 50.0;
    /// First-to-last change in points allowed below this reads as consistent.
    pub const CONSISTENT_DEFENSE_SPREAD: f64 = 10.0;
    /// Every game's team assists must be above this for good ball movement.
    pub const STRONG_ASSISTS: f64 = 20.0;
    /// Any game allowing more than this calls for defensive work.
    pub const HIGH_POINTS_ALLOWED: f64 = 100.0;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnalysis {
    pub scoring_improving: bool,
    pub efficient: bool,
    pub summary: String,
    pub recommendation: String,
}

/// Reads a player's trend series. `None` when there are no games to read.
///
/// Scoring counts as improving when the window holds more than one game and
/// its first value is higher than its last.
pub fn player_analysis(name: &str, trends: &PlayerTrends) -> Option<PlayerAnalysis> {
    let (first, last) = (trends.scoring.first()?, trends.scoring.last()?);
    let scoring_improving = trends.scoring.len() > 1 && first > last;
    let efficient = trends
        .efficiency
        .iter()
        .all(|pct| *pct > analysis_thresholds::EFFICIENT_FG_PCT);

    let summary = format!(
        "{name} has shown {} scoring trends over the last {} games. Their shooting efficiency has been {}.",
        if scoring_improving { "improving" } else { "varying" },
        trends.scoring.len(),
        if efficient {
            "consistently above 50%"
        } else {
            "inconsistent"
        },
    );
    let recommendation = if scoring_improving {
        "Continue with current offensive strategy as scoring is trending upward."
    } else {
        "Consider adjusting offensive sets to create better scoring opportunities."
    };

    Some(PlayerAnalysis {
        scoring_improving,
        efficient,
        summary,
        recommendation: recommendation.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysis {
    pub offense_improving: bool,
    pub defense_consistent: bool,
    pub strong_ball_movement: bool,
    pub defense_leaking: bool,
    pub summary: String,
    pub ball_movement: String,
    pub recommendation: String,
}

/// Reads the team's trend series. `None` without any scoring history.
pub fn team_analysis(trends: &TeamTrends) -> Option<TeamAnalysis> {
    let (first, last) = (trends.scoring.first()?, trends.scoring.last()?);
    let offense_improving = first > last;
    let defense_consistent = match (trends.points_allowed.first(), trends.points_allowed.last()) {
        (Some(first), Some(last)) => {
            (first - last).abs() < analysis_thresholds::CONSISTENT_DEFENSE_SPREAD
        }
        _ => true,
    };
    let strong_ball_movement = trends
        .assists
        .iter()
        .all(|assists| *assists > analysis_thresholds::STRONG_ASSISTS);
    let defense_leaking = trends
        .points_allowed
        .iter()
        .any(|allowed| *allowed > analysis_thresholds::HIGH_POINTS_ALLOWED);

    let summary = format!(
        "The team has shown {} over the last {} games, while defensive performance has been {}.",
        if offense_improving {
            "improving offensive production"
        } else {
            "varying offensive production"
        },
        trends.scoring.len(),
        if defense_consistent {
            "relatively consistent"
        } else {
            "inconsistent"
        },
    );
    let ball_movement = format!(
        "Ball movement metrics (assists) indicate {}.",
        if strong_ball_movement {
            "excellent team chemistry and passing"
        } else {
            "opportunities for improved ball movement"
        },
    );
    let recommendation = if defense_leaking {
        "Focus on defensive rotations and communication to reduce points allowed."
    } else {
        "Maintain defensive intensity while looking for opportunities to increase scoring efficiency."
    };

    Some(TeamAnalysis {
        offense_improving,
        defense_consistent,
        strong_ball_movement,
        defense_leaking,
        summary,
        ball_movement,
        recommendation: recommendation.to_string(),
    })
}
