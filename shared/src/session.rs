//! # Session Marker Storage
//!
//! The session marker lives in a per-origin key-value store (browser
//! `localStorage` in production). Nothing here verifies the token; any
//! non-empty value means "logged in".

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USERNAME_KEY: &str = "username";
pub const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";

/// String key-value storage the session marker is written to
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store, used in tests and anywhere without browser storage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Opaque token: base64 of `username:epoch_millis`
pub fn generate_token(username: &str, epoch_millis: u64) -> String {
    STANDARD.encode(format!("{}:{}", username, epoch_millis))
}

/// Everything the login page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMarker {
    pub username: Option<String>,
    pub token: Option<String>,
    pub remembered_username: Option<String>,
}

impl SessionMarker {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            username: store.get(USERNAME_KEY),
            token: store.get(AUTH_TOKEN_KEY),
            remembered_username: store.get(REMEMBERED_USERNAME_KEY),
        }
    }

    /// An empty token counts as logged out
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// Persist a successful login.
///
/// Token and username are always written; the remembered slot is set when
/// `remember_me` is on and cleared otherwise.
pub fn record_login(store: &mut impl KeyValueStore, username: &str, token: &str, remember_me: bool) {
    if remember_me {
        store.set(REMEMBERED_USERNAME_KEY, username);
    } else {
        store.remove(REMEMBERED_USERNAME_KEY);
    }
    store.set(AUTH_TOKEN_KEY, token);
    store.set(USERNAME_KEY, username);
    log::info!("Session recorded for '{}' (remember me: {})", username, remember_me);
}

/// Drop the token and username. The remembered username survives a logout.
pub fn clear_session(store: &mut impl KeyValueStore) {
    store.remove(AUTH_TOKEN_KEY);
    store.remove(USERNAME_KEY);
}

/// What the login page should do when it loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupAction {
    /// A token is present: go straight to the main page
    pub redirect_to_main: bool,
    /// Pre-fill the username field and tick "remember me"
    pub remembered_username: Option<String>,
}

pub fn startup_check(store: &impl KeyValueStore) -> StartupAction {
    let marker = SessionMarker::load(store);
    StartupAction {
        redirect_to_main: marker.is_logged_in(),
        remembered_username: marker.remembered_username.filter(|name| !name.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_encodes_username_and_timestamp() {
        let token = generate_token("admin", 1_700_000_000_000);
        let decoded = STANDARD.decode(&token).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "admin:1700000000000");
    }

    #[test]
    fn test_tokens_differ_over_time() {
        assert_ne!(generate_token("demo", 1), generate_token("demo", 2));
    }

    #[test]
    fn test_record_login_with_remember_me() {
        let mut store = MemoryStore::new();
        record_login(&mut store, "admin", "tok", true);
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("admin"));
        assert_eq!(store.get(REMEMBERED_USERNAME_KEY).as_deref(), Some("admin"));
    }

    #[test]
    fn test_record_login_without_remember_me_clears_previous_slot() {
        let mut store = MemoryStore::new();
        store.set(REMEMBERED_USERNAME_KEY, "olduser");
        record_login(&mut store, "user", "tok", false);
        assert_eq!(store.get(REMEMBERED_USERNAME_KEY), None);
        assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("user"));
        assert!(store.get(AUTH_TOKEN_KEY).is_some());
    }

    #[test]
    fn test_startup_redirects_when_token_present() {
        let mut store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "some-token");
        let action = startup_check(&store);
        assert!(action.redirect_to_main);
        assert_eq!(action.remembered_username, None);
    }

    #[test]
    fn test_empty_token_is_logged_out() {
        let mut store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "");
        assert!(!SessionMarker::load(&store).is_logged_in());
        assert!(!startup_check(&store).redirect_to_main);
    }

    #[test]
    fn test_startup_prefills_remembered_username() {
        let mut store = MemoryStore::new();
        store.set(REMEMBERED_USERNAME_KEY, "rememberedUser");
        let action = startup_check(&store);
        assert!(!action.redirect_to_main);
        assert_eq!(action.remembered_username.as_deref(), Some("rememberedUser"));
    }

    #[test]
    fn test_empty_store_is_logged_out() {
        let store = MemoryStore::new();
        assert!(!SessionMarker::load(&store).is_logged_in());
        assert_eq!(
            startup_check(&store),
            StartupAction {
                redirect_to_main: false,
                remembered_username: None
            }
        );
    }

    #[test]
    fn test_clear_session_keeps_remembered_username() {
        let mut store = MemoryStore::new();
        record_login(&mut store, "demo", "tok", true);
        clear_session(&mut store);
        let marker = SessionMarker::load(&store);
        assert!(!marker.is_logged_in());
        assert_eq!(marker.username, None);
        assert_eq!(marker.remembered_username.as_deref(), Some("demo"));
    }
}
