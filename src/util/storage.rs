//! Key-value persistence for the login token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the raw token under [`TOKEN_STORAGE_KEY`] and the
//! logout flow removes it. [`LocalStorage`] is the browser backing;
//! [`MemoryStore`] serves tests and non-browser builds.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort: a disabled or full `localStorage` is ignored so a
//! storage failure never blocks the session transition.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub const TOKEN_STORAGE_KEY: &str = "token";

/// Write-only string key-value store with overwrite semantics. Nothing in
/// the login flow reads the token back.
pub trait KeyValueStore {
    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// `window.localStorage`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
