//! Best-score persistence
//!
//! One key-value pair: [`BEST_SCORE_KEY`] → decimal integer string.

use std::collections::HashMap;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "bestScore";

// Abstract key-value backend (localStorage in the browser)
pub trait ScoreStore {
    /// Raw stored value, `Ok(None)` when absent
    fn read(&self, key: &str) -> Result<Option<String>, String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// Parse a stored best score; anything missing or malformed counts as 0
pub fn parse_best(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Read the best score, degrading to 0 when the store is unavailable
pub fn load_best(store: &dyn ScoreStore) -> u32 {
    match store.read(BEST_SCORE_KEY) {
        Ok(raw) => parse_best(raw.as_deref()),
        Err(e) => {
            log::warn!("Best score unavailable, starting from 0: {}", e);
            0
        }
    }
}

/// Persist the best score; failures are logged and otherwise ignored
pub fn save_best(store: &mut dyn ScoreStore, best: u32) {
    if let Err(e) = store.write(BEST_SCORE_KEY, &best.to_string()) {
        log::warn!("Failed to save best score {}: {}", best, e);
    }
}

/// In-memory store for tests and hosts without persistence
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: &str) -> Self {
        let mut store = Self::new();
        store
            .values
            .insert(BEST_SCORE_KEY.to_string(), best.to_string());
        store
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
