//! Best score in `window.localStorage`

use game_core::ScoreStore;
use web_sys::Storage;

/// `localStorage` backed store. Missing storage (private mode, disabled
/// cookies) surfaces as read/write errors, which the game treats as "no best".
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, best score will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, String> {
        self.storage
            .as_ref()
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl ScoreStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        self.storage()?
            .get_item(key)
            .map_err(|e| format!("Failed to read {}: {:?}", key, e))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| format!("Failed to write {}: {:?}", key, e))
    }
}
