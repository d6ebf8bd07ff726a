//! Key-value backend behind the store
//!
//! One JSON blob per string key. The web build talks to
//! `window.localStorage`; tests and native builds use an in-memory map
//! injected at construction, so nothing in the data layer touches browser
//! globals directly.

use std::collections::HashMap;

use thiserror::Error;

/// A persisted blob exists but does not deserialize as its expected type.
///
/// Recovery policy differs per blob: record data propagates this error,
/// settings fall back to defaults (see `PortfolioStore`).
#[derive(Debug, Error)]
#[error("corrupted blob under key `{key}`: {source}")]
pub struct CorruptedStoreError {
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

/// String-keyed blob storage. Writes are fire-and-forget, matching
/// LocalStorage semantics; a full or denied storage area loses the write.
pub trait StorageBackend {
    /// Raw value under `key`, or `None` when the key was never written
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory backend for tests and native builds
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

/// `window.localStorage` backend (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Attach to `window.localStorage`; `None` when the browser denies
    /// access (e.g. storage disabled in a sandboxed frame)
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::warn!("LocalStorage write failed for key {key}");
        }
    }
}
