//! Recent-window trend series over stored games.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::game::GameRecord;
use crate::stats::{round_one_decimal, shooting_split, PlayerStat, ShotLine};

pub const DEFAULT_WINDOW: usize = 3;

/// Whose numbers a trend follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<'a> {
    Player(&'a str),
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TrendMetric {
    /// Player points, or the team's scoreboard total.
    Scoring,
    FieldGoalPct,
    /// Steals plus blocks.
    Defense,
    Assists,
    Rebounds,
    Turnovers,
    PointsAllowed,
}

impl TrendMetric {
    /// Pure extraction of one value for one game. `None` when the game has
    /// no stat record for the selected player.
    pub fn extract(self, game: &GameRecord, selector: &Selector<'_>) -> Option<f64> {
        match selector {
            Selector::Player(player_id) => {
                let stats = game.stats_for(player_id)?;
                Some(self.extract_player(game, stats))
            }
            Selector::Team => Some(self.extract_team(game)),
        }
    }

    fn extract_player(self, game: &GameRecord, stats: &PlayerStat) -> f64 {
        match self {
            TrendMetric::Scoring => f64::from(stats.points),
            TrendMetric::FieldGoalPct => field_goal_pct(stats),
            TrendMetric::Defense => f64::from(stats.steal) + f64::from(stats.block),
            TrendMetric::Assists => f64::from(stats.assist),
            TrendMetric::Rebounds => f64::from(stats.rebounds()),
            TrendMetric::Turnovers => f64::from(stats.turnover),
            TrendMetric::PointsAllowed => f64::from(game.score.opponent),
        }
    }

    fn extract_team(self, game: &GameRecord) -> f64 {
        let totals = game.team_totals();
        match self {
            TrendMetric::Scoring => f64::from(game.score.team),
            TrendMetric::FieldGoalPct => {
                let field_goals = game
                    .player_stats
                    .values()
                    .map(|s| shooting_split(s).field_goals())
                    .fold(ShotLine::default(), ShotLine::combine);
                round_one_decimal(field_goals.percentage())
            }
            TrendMetric::Defense => f64::from(totals.steals) + f64::from(totals.blocks),
            TrendMetric::Assists => f64::from(totals.assists),
            TrendMetric::Rebounds => f64::from(totals.rebounds),
            TrendMetric::Turnovers => f64::from(totals.turnovers),
            TrendMetric::PointsAllowed => f64::from(game.score.opponent),
        }
    }
}

/// Field goal percentage rounded to one decimal, `0.0` without attempts.
pub fn field_goal_pct(stats: &PlayerStat) -> f64 {
    round_one_decimal(shooting_split(stats).field_goals().percentage())
}

/// Games the selector takes part in, oldest first, tail of `window_size`.
fn qualifying_games<'g>(
    games: &'g [GameRecord],
    selector: &Selector<'_>,
    window_size: usize,
) -> Vec<&'g GameRecord> {
    let mut qualifying: Vec<&GameRecord> = games
        .iter()
        .filter(|game| match selector {
            Selector::Player(player_id) => game.has_player(player_id),
            Selector::Team => true,
        })
        .collect();
    qualifying.sort_by_key(|game| game.created_at);

    let skip = qualifying.len().saturating_sub(window_size);
    qualifying.split_off(skip)
}

/// Values of `metric` over the most recent games, oldest to newest.
///
/// Never longer than `window_size` and never padded: rostered players
/// without a stat record are skipped rather than zero-filled.
pub fn recent_window(
    games: &[GameRecord],
    selector: &Selector<'_>,
    metric: TrendMetric,
    window_size: usize,
) -> Vec<f64> {
    qualifying_games(games, selector, window_size)
        .into_iter()
        .filter_map(|game| metric.extract(game, selector))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerTrends {
    pub scoring: Vec<f64>,
    pub efficiency: Vec<f64>,
    pub defense: Vec<f64>,
}

impl PlayerTrends {
    pub fn is_empty(&self) -> bool {
        self.scoring.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTrends {
    pub scoring: Vec<f64>,
    pub points_allowed: Vec<f64>,
    pub assists: Vec<f64>,
    pub rebounds: Vec<f64>,
    pub turnovers: Vec<f64>,
}

pub fn player_trends(games: &[GameRecord], player_id: &str, window_size: usize) -> PlayerTrends {
    let selector = Selector::Player(player_id);
    PlayerTrends {
        scoring: recent_window(games, &selector, TrendMetric::Scoring, window_size),
        efficiency: recent_window(games, &selector, TrendMetric::FieldGoalPct, window_size),
        defense: recent_window(games, &selector, TrendMetric::Defense, window_size),
    }
}

pub fn team_trends(games: &[GameRecord], window_size: usize) -> TeamTrends {
    let selector = Selector::Team;
    TeamTrends {
        scoring: recent_window(games, &selector, TrendMetric::Scoring, window_size),
        points_allowed: recent_window(games, &selector, TrendMetric::PointsAllowed, window_size),
        assists: recent_window(games, &selector, TrendMetric::Assists, window_size),
        rebounds: recent_window(games, &selector, TrendMetric::Rebounds, window_size),
        turnovers: recent_window(games, &selector, TrendMetric::Turnovers, window_size),
    }
}
