//! Lock-guarded entry storage.
//!
//! All access to the map goes through a single `RwLock`, so concurrent
//! tool calls never observe a partially written entry.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

/// A stored cache value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheEntry {
    pub key: String,
    pub value: Value,
    /// RFC 3339 time of the write that produced this entry.
    pub stored_at: String,
}

/// Cache handle.
///
/// Cloning is cheap; every clone shares the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct KeyValueCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl KeyValueCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`.
    ///
    /// Replaces any prior entry wholesale and returns it.
    pub fn set(&self, key: impl Into<String>, value: Value) -> Option<CacheEntry> {
        let key = key.into();
        let entry = CacheEntry { key: key.clone(), value, stored_at: Utc::now().to_rfc3339() };
        self.entries.write().insert(key, entry)
    }

    /// Look up the entry for `key`. `None` means the key was never set.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().get(key).cloned()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when no key has been set yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
