use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::clock::ClockTime;
use crate::insights::InsightLog;
use crate::stats::{self, PlayerStat, TeamTotals};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: String,
    pub name: String,
    /// Jersey number as entered, e.g. "00" or "23".
    pub number: String,
    pub position: String,
    pub is_active: bool,
}

impl RosterPlayer {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            number: number.into(),
            position: position.into(),
            is_active: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn benched(mut self) -> Self {
        self.is_active = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSide {
    Team,
    Opponent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub team: u32,
    pub opponent: u32,
}

impl Score {
    pub fn side_mut(&mut self, side: ScoreSide) -> &mut u32 {
        match side {
            ScoreSide::Team => &mut self.team,
            ScoreSide::Opponent => &mut self.opponent,
        }
    }

    pub fn is_win(&self) -> bool {
        self.team > self.opponent
    }
}

/// One tracked game: roster, per-player counters, scoreboard and insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    pub opponent: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub players: Vec<RosterPlayer>,
    pub player_stats: HashMap<String, PlayerStat>,
    pub score: Score,
    pub quarter: u8,
    pub time_remaining: ClockTime,
    pub status: GameStatus,
    pub insights: InsightLog,
}

impl GameRecord {
    /// A fresh game in the first quarter with zeroed stats for every player.
    pub fn new(
        name: String,
        team: String,
        opponent: String,
        players: Vec<RosterPlayer>,
        quarter_length: ClockTime,
        insight_capacity: usize,
    ) -> Self {
        let player_stats = players
            .iter()
            .map(|player| (player.id.clone(), PlayerStat::new()))
            .collect();

        Self {
            id: Uuid::new_v4(),
            name,
            team,
            opponent,
            created_at: Utc::now(),
            players,
            player_stats,
            score: Score::default(),
            quarter: 1,
            time_remaining: quarter_length,
            status: GameStatus::InProgress,
            insights: InsightLog::with_capacity(insight_capacity),
        }
    }

    pub fn player(&self, player_id: &str) -> Option<&RosterPlayer> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut RosterPlayer> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.player(player_id).is_some()
    }

    pub fn stats_for(&self, player_id: &str) -> Option<&PlayerStat> {
        self.player_stats.get(player_id)
    }

    pub fn active_players(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.players.iter().filter(|p| p.is_active)
    }

    pub fn bench_players(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.players.iter().filter(|p| !p.is_active)
    }

    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    pub fn team_totals(&self) -> TeamTotals {
        stats::team_totals(self.player_stats.values())
    }
}
