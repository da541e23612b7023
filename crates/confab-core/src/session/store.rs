//! Token-keyed session store.
//!
//! Holds the profile information a client attached to its handshake or chat
//! frames. Shared across all connections; entries slide-expire after the
//! configured idle window, so a session can outlive the connection that
//! created it and be resumed by a later one with the same token.

use std::time::Duration;

use confab_types::information::Information;

use crate::cache::TtlCache;

/// In-memory session cache with first-write-wins semantics per token.
pub struct SessionStore {
    entries: TtlCache<String, Information>,
}

impl SessionStore {
    /// Create a store whose entries expire after `ttl` without access.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: TtlCache::new(ttl),
        }
    }

    /// Current information for `token`, or the empty record when none is live.
    ///
    /// A hit refreshes the entry's expiry.
    pub fn get(&self, token: &str) -> Information {
        self.entries.get(token).unwrap_or_default()
    }

    /// Store `information` only if the token currently maps to the empty record.
    ///
    /// The check and the write happen under one shard lock. An empty
    /// `information` never displaces anything. Returns whether it was stored.
    pub fn set_if_absent(&self, token: &str, information: Information) -> bool {
        if information.is_empty() {
            return false;
        }

        let stored = self
            .entries
            .insert_unless(token.to_string(), information, |current| !current.is_empty());
        if stored {
            tracing::debug!(token, "Stored session information");
        }
        stored
    }

    pub fn ttl(&self) -> Duration {
        self.entries.ttl()
    }

    /// Number of sessions that have not expired.
    pub fn live_sessions(&self) -> usize {
        self.entries.live_len()
    }

    /// Remove expired sessions. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        self.entries.purge_expired()
    }
}
