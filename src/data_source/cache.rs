//! Keyed record cache with per-key locking
//!
//! Each key owns a slot guarded by an async mutex. A resolver holds the slot's
//! lock across check, fetch and store, so concurrent queries for one key share a
//! single fetch while other keys proceed independently.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::record::DataRecord;

/// A successfully fetched record set
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub value: Arc<Vec<DataRecord>>,
    /// Monotonic fetch time, used for freshness
    pub fetched_at: Instant,
    /// Wall-clock fetch time, for reporting
    pub fetched_at_utc: DateTime<Utc>,
}

impl CacheEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: Arc<Vec<DataRecord>>) -> Self {
        Self {
            key: key.into(),
            value,
            fetched_at: Instant::now(),
            fetched_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Freshness of a key's slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    NoEntry,
    Fresh,
    Stale,
}

impl EntryState {
    #[must_use]
    pub fn of(entry: Option<&CacheEntry>, ttl: Duration) -> Self {
        match entry {
            None => EntryState::NoEntry,
            Some(e) if e.is_fresh(ttl) => EntryState::Fresh,
            Some(_) => EntryState::Stale,
        }
    }
}

/// Point-in-time view of one cached key
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub key: String,
    pub state: EntryState,
    pub records: usize,
    pub fetched_at: Option<DateTime<Utc>>,
}

pub type CacheSlot = Arc<Mutex<Option<CacheEntry>>>;

/// Process-wide cache of remote record sets
#[derive(Debug)]
pub struct RecordCache {
    slots: DashMap<String, CacheSlot>,
    ttl: Duration,
}

impl RecordCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: DashMap::new(),
            ttl,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Slot for `key`, created empty on first use
    #[must_use]
    pub fn slot(&self, key: &str) -> CacheSlot {
        if let Some(slot) = self.slots.get(key) {
            return Arc::clone(slot.value());
        }
        Arc::clone(self.slots.entry(key.to_string()).or_default().value())
    }

    /// Remove `key`'s slot when only the map and `slot` still reference it
    ///
    /// The caller holds `slot`'s lock and has seen it empty. A slot that other
    /// queries are waiting on is kept so they coalesce on it.
    pub fn discard_unused(&self, key: &str, slot: &CacheSlot) -> bool {
        let removed = self
            .slots
            .remove_if(key, |_, current| {
                Arc::ptr_eq(current, slot) && Arc::strong_count(current) == 2
            })
            .is_some();
        if removed {
            log::debug!("Dropped empty cache slot for '{key}'");
        }
        removed
    }

    /// Number of keys that have a slot
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop the entry for `key`, forcing the next query to fetch
    pub async fn invalidate(&self, key: &str) {
        // Clone out of the map before awaiting
        let slot = self.slots.get(key).map(|s| Arc::clone(s.value()));
        if let Some(slot) = slot {
            *slot.lock().await = None;
            log::debug!("Invalidated cached records for '{key}'");
        }
    }

    /// Drop every entry
    pub async fn clear(&self) {
        let slots: Vec<CacheSlot> = self.slots.iter().map(|s| Arc::clone(s.value())).collect();
        for slot in slots {
            *slot.lock().await = None;
        }
        self.slots.clear();
    }

    /// Snapshot of every key, sorted by key
    pub async fn snapshot(&self) -> Vec<CacheStatus> {
        let slots: Vec<(String, CacheSlot)> = self
            .slots
            .iter()
            .map(|s| (s.key().clone(), Arc::clone(s.value())))
            .collect();

        let mut statuses = Vec::with_capacity(slots.len());
        for (key, slot) in slots {
            let entry = slot.lock().await;
            statuses.push(CacheStatus {
                key,
                state: EntryState::of(entry.as_ref(), self.ttl),
                records: entry.as_ref().map_or(0, |e| e.value.len()),
                fetched_at: entry.as_ref().map(|e| e.fetched_at_utc),
            });
        }
        statuses.sort_by(|a, b| a.key.cmp(&b.key));
        statuses
    }
}
