//! # Browser local storage backend
//!
//! [`LocalStore`] is the [`SessionStore`](crate::SessionStore) implementation
//! used on the **web platform**. It persists the session record into
//! `window.localStorage` via `web-sys`.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! stored session" rather than crashing; the authoritative user record
//! always lives behind the REST API.

use crate::session::SessionStore;

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
