//! In-process TTL cache
//!
//! Lock-free map from request signature to cached catalog payload. Entries
//! carry their own deadline; expired entries are dropped lazily on read.
//! Staleness is bounded by the TTL - there is no other consistency story,
//! the catalog service remains the source of truth.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;

struct CacheEntry {
    expires_at: Instant,
    payload: Value,
}

/// TTL-bounded response cache keyed by request signature
#[derive(Default)]
pub struct TtlCache {
    entries: DashMap<String, CacheEntry>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Fetch a live entry, evicting it if its deadline has passed
    pub fn get(&self, key: &str) -> Option<Value> {
        let expired = {
            let entry = self.entries.get(key)?;
            if entry.expires_at > Instant::now() {
                return Some(entry.payload.clone());
            }
            true
        };
        // Guard dropped above; removing while holding it would deadlock.
        if expired {
            self.entries.remove(key);
        }
        None
    }

    pub fn insert(&self, key: impl Into<String>, payload: Value, ttl: Duration) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                expires_at: Instant::now() + ttl,
                payload,
            },
        );
    }
}
