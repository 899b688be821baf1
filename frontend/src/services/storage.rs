use shared::KeyValueStore;
use web_sys::Storage;

use super::logging::Logger;

/// `KeyValueStore` over the browser's `localStorage`.
///
/// When storage is unavailable (privacy mode, sandboxed frame) every read
/// comes back empty and writes are dropped with a warning.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = gloo::utils::window().local_storage().ok().flatten();
        if storage.is_none() {
            Logger::warn_with_component("browser-store", "localStorage is not available");
        }
        Self { storage }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                Logger::warn_with_component("browser-store", &format!("Failed to write '{}'", key));
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if storage.remove_item(key).is_err() {
                Logger::warn_with_component("browser-store", &format!("Failed to remove '{}'", key));
            }
        }
    }
}
