//! Background purge of expired cache entries.
//!
//! Lookups already treat expired entries as absent; the sweeper only
//! reclaims memory held by tokens that are never seen again.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::store::SessionStore;
use crate::cache::TtlCache;

/// Anything holding entries that can expire.
pub trait Purge: Send + Sync {
    /// Remove expired entries, returning how many were dropped.
    fn purge_expired(&self) -> usize;
}

impl Purge for SessionStore {
    fn purge_expired(&self) -> usize {
        SessionStore::purge_expired(self)
    }
}

impl<K, V> Purge for TtlCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn purge_expired(&self) -> usize {
        TtlCache::purge_expired(self)
    }
}

/// A named cache registered with the sweeper.
pub struct SweepTarget {
    pub name: &'static str,
    pub cache: Arc<dyn Purge>,
}

impl SweepTarget {
    pub fn new(name: &'static str, cache: Arc<dyn Purge>) -> Self {
        Self { name, cache }
    }
}

/// Run one purge pass over every target. Returns the total removed.
pub fn sweep_once(targets: &[SweepTarget]) -> usize {
    targets
        .iter()
        .map(|target| {
            let removed = target.cache.purge_expired();
            if removed > 0 {
                tracing::debug!(cache = target.name, removed, "Purged expired entries");
            }
            removed
        })
        .sum()
}

/// Spawn a task that sweeps `targets` every `interval` until `cancel` fires.
pub fn spawn_sweeper(
    targets: Vec<SweepTarget>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; skip it.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Session sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    sweep_once(&targets);
                }
            }
        }
    })
}
