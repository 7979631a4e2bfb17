//! # Session persistence
//!
//! [`SessionManager`] owns the single durable piece of client state: the
//! JSON-encoded user record under the `"user"` storage key. It is generic
//! over a [`SessionStore`] backend so the same logic runs against browser
//! local storage on the web and an in-memory map in tests.
//!
//! The manager never persists the photo field; [`SessionManager::save`]
//! strips it before writing, keeping the stored copy small while the full
//! record stays in memory.

use crate::models::Session;

/// Storage key for the persisted session record.
pub const SESSION_KEY: &str = "user";

/// Key/value backend for the persisted session.
///
/// Synchronous because browser local storage is synchronous. Implementations
/// degrade failures to "no data" rather than panicking.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Explicitly constructed manager for the persisted session.
pub struct SessionManager<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted session, if any.
    ///
    /// Malformed stored JSON is logged and treated as logged-out.
    pub fn load(&self) -> Option<Session> {
        let raw = self.store.read(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("discarding malformed stored session: {err}");
                None
            }
        }
    }

    /// Persist the session, minus the photo field.
    pub fn save(&self, session: &Session) {
        let stripped = session.without_photo();
        match serde_json::to_string(&stripped) {
            Ok(json) => self.store.write(SESSION_KEY, &json),
            Err(err) => tracing::warn!("failed to serialize session: {err}"),
        }
    }

    /// Remove the persisted session.
    pub fn clear(&self) {
        self.store.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn session_with_photo() -> Session {
        Session {
            id: 1,
            username: "test".to_string(),
            email: Some("test@example.com".to_string()),
            birthdate: Some("1999-12-31".to_string()),
            photo: Some("cGhvdG8=".to_string()),
        }
    }

    #[test]
    fn test_save_strips_photo_from_persisted_copy() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store.clone());

        manager.save(&session_with_photo());

        let raw = store.read(SESSION_KEY).unwrap();
        assert!(!raw.contains("photo"));
        assert!(raw.contains("test@example.com"));

        // Loading back yields the same record minus the photo
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, session_with_photo().without_photo());
    }

    #[test]
    fn test_clear_removes_persisted_session() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store.clone());

        manager.save(&session_with_photo());
        manager.clear();

        assert!(store.read(SESSION_KEY).is_none());
        assert!(manager.load().is_none());
    }

    #[test]
    fn test_load_with_nothing_stored() {
        let manager = SessionManager::new(MemoryStore::new());
        assert!(manager.load().is_none());
    }

    #[test]
    fn test_malformed_stored_json_loads_as_logged_out() {
        let store = MemoryStore::new();
        store.write(SESSION_KEY, "{not json");

        let manager = SessionManager::new(store);
        assert!(manager.load().is_none());
    }
}
