use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{InMemoryStateRepository, PersistedState, StateRepository, StoreError};
use crate::config::TrackerConfig;
use crate::game::{ClockTick, ClockTime, GameRecord, GameStatus, RosterPlayer, ScoreSide};
use crate::insights::InsightEngine;
use crate::stats::{apply_stat_event, efficiency_score, PlayerStat, StatKind};

/// Owns every tracked game and the current game.
///
/// All mutations go through one write path that looks the game up, applies
/// the change in place and then persists the whole state. A failed
/// mutation leaves both the in-memory state and the saved blob untouched.
/// Persistence failures after a successful mutation are logged, not
/// returned.
pub struct GameStore {
    games: Vec<GameRecord>,
    current_game_id: Option<Uuid>,
    repository: Arc<dyn StateRepository>,
    engine: InsightEngine,
    config: TrackerConfig,
}

impl GameStore {
    pub fn builder(repository: Arc<dyn StateRepository>) -> GameStoreBuilder {
        GameStoreBuilder::new(repository)
    }

    /// An empty store backed by memory only, with default config.
    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(InMemoryStateRepository::new()),
            TrackerConfig::default(),
            None,
            PersistedState::default(),
        )
    }

    fn from_parts(
        repository: Arc<dyn StateRepository>,
        config: TrackerConfig,
        engine: Option<InsightEngine>,
        state: PersistedState,
    ) -> Self {
        let engine = engine
            .unwrap_or_else(|| InsightEngine::builder(&config.insights).build());

        let mut games = state.games;
        for game in &mut games {
            game.insights.set_capacity(config.insight_log_capacity);
        }

        let current_game_id = state.current_game.and_then(|current| {
            let known = games.iter().any(|g| g.id == current.id);
            if !known {
                warn!(game_id = %current.id, "Saved current game is not in the game list, ignoring");
            }
            known.then_some(current.id)
        });

        Self {
            games,
            current_game_id,
            repository,
            engine,
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn get_game(&self, game_id: Uuid) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == game_id)
    }

    pub fn current_game(&self) -> Option<&GameRecord> {
        self.current_game_id.and_then(|id| self.get_game(id))
    }

    pub fn select_game(&mut self, game_id: Uuid) -> Result<(), StoreError> {
        if self.get_game(game_id).is_none() {
            return Err(StoreError::GameNotFound(game_id));
        }
        self.current_game_id = Some(game_id);
        self.persist();
        Ok(())
    }

    pub fn player_stats(&self, game_id: Uuid, player_id: &str) -> Option<&PlayerStat> {
        self.get_game(game_id)?.stats_for(player_id)
    }

    pub fn player_efficiency(&self, game_id: Uuid, player_id: &str) -> Option<i64> {
        self.player_stats(game_id, player_id).map(efficiency_score)
    }

    /// Snapshot in the persisted layout.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            games: self.games.clone(),
            current_game: self.current_game().cloned(),
        }
    }

    #[instrument(skip(self, roster), fields(players = roster.len()))]
    pub fn create_game(
        &mut self,
        name: &str,
        team: &str,
        opponent: &str,
        roster: Vec<RosterPlayer>,
    ) -> Result<Uuid, StoreError> {
        self.validate_new_game(name, team, opponent, &roster)?;

        let game = GameRecord::new(
            name.trim().to_string(),
            team.trim().to_string(),
            opponent.trim().to_string(),
            roster,
            self.config.quarter_length,
            self.config.insight_log_capacity,
        );
        let game_id = game.id;

        self.games.push(game);
        self.current_game_id = Some(game_id);
        self.persist();

        info!(game_id = %game_id, "Game created");
        Ok(game_id)
    }

    #[instrument(skip(self))]
    pub fn update_score(
        &mut self,
        game_id: Uuid,
        side: ScoreSide,
        points: u32,
    ) -> Result<(), StoreError> {
        if points == 0 {
            return Err(StoreError::Stats(crate::stats::StatsError::InvalidDelta(0)));
        }
        self.mutate(game_id, |game, _| {
            let score = game.score.side_mut(side);
            *score = score.saturating_add(points);
            debug!(team = game.score.team, opponent = game.score.opponent, "Score updated");
            Ok(())
        })
    }

    /// `Completed` is terminal. Completing twice is a no-op; going back to
    /// `InProgress` fails.
    #[instrument(skip(self))]
    pub fn update_status(&mut self, game_id: Uuid, status: GameStatus) -> Result<(), StoreError> {
        self.mutate(game_id, |game, _| {
            match (game.status, status) {
                (GameStatus::Completed, GameStatus::InProgress) => {
                    return Err(StoreError::GameCompleted(game_id));
                }
                (GameStatus::InProgress, GameStatus::Completed) => {
                    info!("Game completed");
                }
                _ => {}
            }
            game.status = status;
            Ok(())
        })
    }

    pub fn complete_game(&mut self, game_id: Uuid) -> Result<(), StoreError> {
        self.update_status(game_id, GameStatus::Completed)
    }

    /// Moves to `quarter` and resets the clock to a full quarter.
    #[instrument(skip(self))]
    pub fn update_quarter(&mut self, game_id: Uuid, quarter: u8) -> Result<(), StoreError> {
        if !(1..=self.config.quarters).contains(&quarter) {
            return Err(StoreError::InvalidQuarter(quarter));
        }
        let quarter_length = self.config.quarter_length;
        self.mutate(game_id, |game, _| {
            game.quarter = quarter;
            game.time_remaining = quarter_length;
            Ok(())
        })
    }

    /// Steps the quarter by `step`, clamped to the valid range.
    pub fn change_quarter(&mut self, game_id: Uuid, step: i8) -> Result<u8, StoreError> {
        let current = self
            .get_game(game_id)
            .ok_or(StoreError::GameNotFound(game_id))?
            .quarter;
        let target = (i16::from(current) + i16::from(step))
            .clamp(1, i16::from(self.config.quarters)) as u8;
        self.update_quarter(game_id, target)?;
        Ok(target)
    }

    pub fn update_time(&mut self, game_id: Uuid, time_remaining: &str) -> Result<(), StoreError> {
        let time: ClockTime = time_remaining.parse()?;
        self.set_clock(game_id, time)
    }

    pub fn set_clock(&mut self, game_id: Uuid, time: ClockTime) -> Result<(), StoreError> {
        self.mutate(game_id, |game, _| {
            game.time_remaining = time;
            Ok(())
        })
    }

    /// One countdown step on the stored clock.
    pub fn tick_clock(&mut self, game_id: Uuid) -> Result<ClockTick, StoreError> {
        self.mutate(game_id, |game, _| Ok(game.time_remaining.tick()))
    }

    /// Flips a player between court and bench, returning the new flag.
    #[instrument(skip(self))]
    pub fn toggle_player_active(
        &mut self,
        game_id: Uuid,
        player_id: &str,
    ) -> Result<bool, StoreError> {
        self.mutate(game_id, |game, _| {
            let player = game
                .player_mut(player_id)
                .ok_or_else(|| StoreError::PlayerNotFound {
                    game_id,
                    player_id: player_id.to_string(),
                })?;
            player.is_active = !player.is_active;
            Ok(player.is_active)
        })
    }

    /// Records a stat event and runs the insight rules on the updated record.
    /// Returns the insight appended to the game's log, if any.
    #[instrument(skip(self))]
    pub fn record_stat(
        &mut self,
        game_id: Uuid,
        player_id: &str,
        kind: StatKind,
        delta: i64,
    ) -> Result<Option<String>, StoreError> {
        self.mutate(game_id, |game, engine| {
            let player = game
                .players
                .iter()
                .find(|p| p.id == player_id)
                .ok_or_else(|| StoreError::PlayerNotFound {
                    game_id,
                    player_id: player_id.to_string(),
                })?;

            let mut updated = game
                .player_stats
                .get(player_id)
                .copied()
                .unwrap_or_default();
            apply_stat_event(&mut updated, kind, delta)?;
            game.player_stats.insert(player_id.to_string(), updated);

            debug!(points = updated.points, "Stat recorded");
            Ok(engine.generate(player, &updated, &mut game.insights))
        })
    }

    /// Same as [`GameStore::record_stat`] for a stat key as sent by an entry
    /// panel, e.g. `"threePointMade"` or `"3PT_MADE"`.
    pub fn record_stat_key(
        &mut self,
        game_id: Uuid,
        player_id: &str,
        key: &str,
        delta: i64,
    ) -> Result<Option<String>, StoreError> {
        let kind = StatKind::parse(key)?;
        self.record_stat(game_id, player_id, kind, delta)
    }

    pub fn add_insight(&mut self, game_id: Uuid, message: &str) -> Result<(), StoreError> {
        self.mutate(game_id, |game, _| {
            game.insights.push(message);
            Ok(())
        })
    }

    fn mutate<T, F>(&mut self, game_id: Uuid, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut GameRecord, &mut InsightEngine) -> Result<T, StoreError>,
    {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or(StoreError::GameNotFound(game_id))?;

        let outcome = apply(game, &mut self.engine)?;
        self.persist();
        Ok(outcome)
    }

    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.snapshot()) {
            warn!(?err, "Failed to persist tracker state");
        }
    }

    fn validate_new_game(
        &self,
        name: &str,
        team: &str,
        opponent: &str,
        roster: &[RosterPlayer],
    ) -> Result<(), StoreError> {
        for (field, value) in [("game name", name), ("team name", team), ("opponent name", opponent)] {
            if value.trim().is_empty() {
                return Err(StoreError::InvalidRoster(format!("{field} cannot be empty")));
            }
        }

        let (min, max) = (self.config.min_roster_size, self.config.max_roster_size);
        if roster.len() < min || roster.len() > max {
            return Err(StoreError::InvalidRoster(format!(
                "roster must have between {min} and {max} players, got {}",
                roster.len()
            )));
        }

        let mut ids = HashSet::new();
        for player in roster {
            if player.id.trim().is_empty() {
                return Err(StoreError::InvalidRoster("player ids cannot be empty".to_string()));
            }
            if player.name.trim().is_empty()
                || player.number.trim().is_empty()
                || player.position.trim().is_empty()
            {
                return Err(StoreError::InvalidRoster(format!(
                    "player {} is missing a name, number or position",
                    player.id
                )));
            }
            if !ids.insert(player.id.as_str()) {
                return Err(StoreError::InvalidRoster(format!(
                    "duplicate player id {}",
                    player.id
                )));
            }
        }

        Ok(())
    }
}

pub struct GameStoreBuilder {
    repository: Arc<dyn StateRepository>,
    config: TrackerConfig,
    engine: Option<InsightEngine>,
}

impl GameStoreBuilder {
    fn new(repository: Arc<dyn StateRepository>) -> Self {
        Self {
            repository,
            config: TrackerConfig::default(),
            engine: None,
        }
    }

    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default OS-seeded engine, e.g. with a seeded one.
    pub fn with_insight_engine(mut self, engine: InsightEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Validates the config, loads whatever the repository holds and
    /// returns the store.
    pub fn open(self) -> Result<GameStore, StoreError> {
        self.config.validate()?;
        let state = self.repository.load()?.unwrap_or_default();
        info!(games = state.games.len(), "Opened game store");
        Ok(GameStore::from_parts(
            self.repository,
            self.config,
            self.engine,
            state,
        ))
    }
}
