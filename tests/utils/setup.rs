use std::path::Path;
use std::sync::Arc;

use courtstats::store::StateRepository;
use courtstats::{
    GameStore, InMemoryStateRepository, InsightEngine, JsonFileStateRepository, TrackerConfig,
};
use uuid::Uuid;

use super::roster_builders::RosterBuilder;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub store: GameStore,
    pub repository: Arc<dyn StateRepository>,
    pub game_id: Uuid,
}

pub struct TestSetupBuilder {
    config: TrackerConfig,
    repository: Arc<dyn StateRepository>,
    seed: u64,
    game_name: String,
    roster: RosterBuilder,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            repository: Arc::new(InMemoryStateRepository::new()),
            seed: 7,
            game_name: "Season Opener".to_string(),
            roster: RosterBuilder::new().with_starting_five(),
        }
    }

    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_json_file(mut self, dir: &Path) -> Self {
        self.repository = Arc::new(JsonFileStateRepository::in_dir(
            dir,
            &self.config.storage_key,
        ));
        self
    }

    pub fn with_roster(mut self, roster: RosterBuilder) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_game_name(mut self, name: &str) -> Self {
        self.game_name = name.to_string();
        self
    }

    /// Opens the store and creates one game from the roster.
    pub fn build(self) -> TestSetup {
        let mut store = GameStore::builder(self.repository.clone())
            .with_config(self.config)
            .with_insight_engine(InsightEngine::seeded(self.seed))
            .open()
            .expect("store should open");

        let game_id = store
            .create_game(&self.game_name, "Hawks", "Owls", self.roster.build())
            .expect("game should be created");

        TestSetup {
            store,
            repository: self.repository,
            game_id,
        }
    }
}
