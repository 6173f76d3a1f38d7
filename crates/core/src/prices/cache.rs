//! Time-to-live price cache.
//!
//! One entry per currency pair. Entries are never evicted; an entry older
//! than the TTL is ignored by [`PriceCache::get`] and replaced by the next
//! [`PriceCache::put`] for that pair.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use log::warn;

use super::model::CachedPrice;
use crate::constants::DEFAULT_PRICE_CACHE_TTL;

/// Thread-safe spot price cache with a fixed TTL for all pairs.
///
/// The lock is only held for the map access itself, never across an
/// upstream request.
pub struct PriceCache {
    entries: Mutex<HashMap<String, CachedPrice>>,
    ttl: Duration,
}

impl PriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Lock the entries, recovering from poison.
    ///
    /// Every critical section is a single map read or insert, so a panic
    /// while holding the lock cannot leave an entry half-written.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, CachedPrice>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Price cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Cached price for `pair`, if present and younger than the TTL.
    pub fn get(&self, pair: &str) -> Option<f64> {
        let entries = self.lock_entries();
        entries
            .get(pair)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.price)
    }

    /// Store `price` for `pair`, stamped now. Overwrites any previous entry.
    pub fn put(&self, pair: &str, price: f64) {
        let mut entries = self.lock_entries();
        entries.insert(pair.to_string(), CachedPrice::new(price));
    }
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_CACHE_TTL)
    }
}
