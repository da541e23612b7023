//! Concurrent key-value cache with sliding per-entry expiry.
//!
//! Backs both the session store and the classification result cache.
//! Every successful read or write pushes the entry's deadline out by the
//! cache TTL; an expired entry is indistinguishable from a missing one and
//! is removed lazily on access or eagerly by [`TtlCache::purge_expired`].
//!
//! Time comes from `tokio::time::Instant` so tests can drive expiry with a
//! paused clock.

use std::borrow::Borrow;
use std::hash::Hash;
use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::time::Instant;

struct Slot<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Slot<V> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Thread-safe map whose entries expire after `ttl` without access.
pub struct TtlCache<K, V> {
    entries: DashMap<K, Slot<V>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Idle window applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return a live value and refresh its deadline.
    ///
    /// Expired entries are removed and reported as absent.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = Instant::now();
        match self.entries.get_mut(key) {
            None => return None,
            Some(mut slot) => {
                if slot.is_live(now) {
                    slot.expires_at = now + self.ttl;
                    return Some(slot.value.clone());
                }
            }
        }

        // Shard guard is released above; another writer may have refreshed
        // the slot in between, so only drop it if it is still stale.
        self.entries.remove_if(key, |_, slot| !slot.is_live(now));
        None
    }

    /// Store `value` under `key` with a fresh deadline, replacing anything there.
    pub fn insert(&self, key: K, value: V) {
        let expires_at = Instant::now() + self.ttl;
        self.entries.insert(key, Slot { value, expires_at });
    }

    /// Atomically store `value` unless a live entry exists that `keep` wants kept.
    ///
    /// `keep` sees the current live value under the shard lock, so two racing
    /// callers cannot both observe a replaceable value and both write. A kept
    /// entry still has its deadline refreshed. Returns whether `value` was stored.
    pub fn insert_unless<F>(&self, key: K, value: V, keep: F) -> bool
    where
        F: FnOnce(&V) -> bool,
    {
        let now = Instant::now();
        let expires_at = now + self.ttl;
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let slot = occupied.get_mut();
                if slot.is_live(now) && keep(&slot.value) {
                    slot.expires_at = expires_at;
                    false
                } else {
                    *slot = Slot { value, expires_at };
                    true
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Slot { value, expires_at });
                true
            }
        }
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, slot| slot.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    /// Number of entries that have not yet expired.
    pub fn live_len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|slot| slot.is_live(now)).count()
    }
}
