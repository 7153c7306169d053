// Tracker configuration: thresholds, capacities and storage naming.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::game::ClockTime;
use crate::insights::{InsightThresholds, RecommendationThresholds, DEFAULT_LOG_CAPACITY};
use crate::trends::DEFAULT_WINDOW;

/// Name of the persisted state blob.
pub const STORAGE_KEY: &str = "basketball-data-storage";

pub const DEFAULT_QUARTER_LENGTH: ClockTime = ClockTime::from_seconds(12 * 60);

/// Regulation quarters; the quarter counter never leaves `1..=MAX_QUARTERS`.
pub const MAX_QUARTERS: u8 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    pub storage_key: String,
    pub insight_log_capacity: usize,
    pub trend_window: usize,
    pub quarter_length: ClockTime,
    pub quarters: u8,
    pub min_roster_size: usize,
    pub max_roster_size: usize,
    pub insights: InsightThresholds,
    pub recommendations: RecommendationThresholds,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            insight_log_capacity: DEFAULT_LOG_CAPACITY,
            trend_window: DEFAULT_WINDOW,
            quarter_length: DEFAULT_QUARTER_LENGTH,
            quarters: MAX_QUARTERS,
            min_roster_size: 5,
            max_roster_size: 10,
            insights: InsightThresholds::default(),
            recommendations: RecommendationThresholds::default(),
        }
    }
}

impl TrackerConfig {
    /// Reads a JSON config file; fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TrackerConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`TrackerConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(validation("storageKey", "must not be empty"));
        }
        if self.insight_log_capacity == 0 {
            return Err(validation("insightLogCapacity", "must be at least 1"));
        }
        if !(1..=MAX_QUARTERS).contains(&self.quarters) {
            return Err(validation("quarters", "must be between 1 and 4"));
        }
        if self.quarter_length.is_zero() {
            return Err(validation("quarterLength", "must be longer than 00:00"));
        }
        if self.min_roster_size > self.max_roster_size {
            return Err(validation(
                "minRosterSize",
                "must not exceed maxRosterSize",
            ));
        }
        Ok(())
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
