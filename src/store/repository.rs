use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, instrument};

use super::StoreError;
use crate::game::GameRecord;

/// The single persisted blob: every game plus the game being tracked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub games: Vec<GameRecord>,
    #[serde(default)]
    pub current_game: Option<GameRecord>,
}

pub trait StateRepository: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PersistedState>, StoreError>;

    fn save(&self, state: &PersistedState) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryStateRepository {
    state: RwLock<Option<PersistedState>>,
    saves: RwLock<u64>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
            saves: RwLock::new(0),
        }
    }

    pub fn save_count(&self) -> u64 {
        self.saves.read().map(|count| *count).unwrap_or_default()
    }
}

impl StateRepository for InMemoryStateRepository {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::Persistence("state lock poisoned".to_string()))?;
        Ok(state.clone())
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| StoreError::Persistence("state lock poisoned".to_string()))?;
        *guard = Some(state.clone());
        if let Ok(mut saves) = self.saves.write() {
            *saves += 1;
        }
        Ok(())
    }
}

/// Stores the state as `<dir>/<storage key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStateRepository {
    path: PathBuf,
}

impl JsonFileStateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path, storage_key: &str) -> Self {
        Self::new(dir.join(format!("{storage_key}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateRepository for JsonFileStateRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        if !self.path.exists() {
            debug!("No saved state yet");
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Persistence(format!("read failed: {e}")))?;
        let state: PersistedState = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Persistence(format!("decode failed: {e}")))?;

        debug!(games = state.games.len(), "Loaded saved state");
        Ok(Some(state))
    }

    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Persistence(format!("create dir failed: {e}")))?;
        }

        let data = serde_json::to_vec_pretty(state)
            .map_err(|e| StoreError::Persistence(format!("encode failed: {e}")))?;

        // Write then rename so a crash never leaves a half-written blob.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &data)
            .map_err(|e| StoreError::Persistence(format!("write failed: {e}")))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| StoreError::Persistence(format!("rename failed: {e}")))?;

        debug!(bytes = data.len(), "Saved state");
        Ok(())
    }
}
