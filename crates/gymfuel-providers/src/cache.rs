// ABOUTME: In-memory food result cache keyed by provider and normalized query
// ABOUTME: Entries expire after a fixed TTL; stale entries are ignored, not evicted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::models::FoodSearchResult;

/// Cached result list with its write time
#[derive(Debug, Clone)]
struct CacheEntry {
    foods: Vec<FoodSearchResult>,
    written_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.written_at.elapsed() < ttl
    }
}

/// Food result cache shared by all provider adapters
///
/// There is no size bound and no background cleanup: query cardinality is small,
/// and a stale entry is simply overwritten the next time its query succeeds.
/// Concurrent writes to the same key race benignly (last write wins).
#[derive(Debug)]
pub struct FoodCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl FoodCache {
    /// Create an empty cache whose entries stay fresh for `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Return the cached foods for `key` if the entry is younger than the TTL
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<FoodSearchResult>> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.foods.clone())
    }

    /// Store `foods` under `key`, overwriting any previous entry
    pub fn set(&self, key: impl Into<String>, foods: Vec<FoodSearchResult>) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                foods,
                written_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, stale ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.clear();
    }
}
