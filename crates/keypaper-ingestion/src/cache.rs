//! In-memory TTL cache of completed searches.
//!
//! Keyed by the full `SearchParams`. Entries older than the TTL are treated
//! as missing and evicted on lookup. Nothing survives a restart.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::models::{SearchOutcome, SearchParams};

pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: SearchOutcome,
    inserted_at: Instant,
}

pub struct SearchCache {
    entries: LruCache<SearchParams, CacheEntry>,
    ttl: Duration,
}

impl SearchCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { entries: LruCache::new(capacity), ttl }
    }

    pub fn get(&mut self, key: &SearchParams) -> Option<SearchOutcome> {
        self.get_at(key, Instant::now())
    }

    /// Lookup as of `now`. A hit requires `now - inserted_at < ttl`.
    pub fn get_at(&mut self, key: &SearchParams, now: Instant) -> Option<SearchOutcome> {
        let fresh = self
            .entries
            .peek(key)
            .map(|e| now.saturating_duration_since(e.inserted_at) < self.ttl)?;

        if !fresh {
            self.entries.pop(key);
            return None;
        }
        self.entries.get(key).map(|e| e.outcome.clone())
    }

    pub fn insert(&mut self, key: SearchParams, outcome: SearchOutcome) {
        self.insert_at(key, outcome, Instant::now());
    }

    pub fn insert_at(&mut self, key: SearchParams, outcome: SearchOutcome, now: Instant) {
        self.entries.put(key, CacheEntry { outcome, inserted_at: now });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}
