use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::DEFAULT_LOG_CAPACITY;

/// Fixed-size FIFO of the most recent insight messages.
///
/// Duplicates are kept; once full, each push evicts the oldest entry.
/// Persisted as a plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct InsightLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for InsightLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl InsightLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a message, returning the evicted one if the log was full.
    pub fn push(&mut self, message: impl Into<String>) -> Option<String> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(message.into());
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, dropping the oldest entries that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

impl From<Vec<String>> for InsightLog {
    fn from(messages: Vec<String>) -> Self {
        let mut log = InsightLog::default();
        for message in messages {
            log.push(message);
        }
        log
    }
}

impl From<InsightLog> for Vec<String> {
    fn from(log: InsightLog) -> Self {
        log.entries.into_iter().collect()
    }
}
