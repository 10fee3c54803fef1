use async_trait::async_trait;
use instance_cache::{CacheStore, InstanceId};
use moka::Expiry;
use moka::future::Cache;
use shared::Result;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Clone)]
struct StoredEntry {
    bytes: Arc<[u8]>,
    ttl: Duration,
}

/// Expiry is taken from the entry itself. Overwrites restart the clock,
/// reads leave it alone.
struct PerEntryTtl;

impl Expiry<InstanceId, StoredEntry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &InstanceId,
        value: &StoredEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &InstanceId,
        value: &StoredEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Moka-based store with per-entry TTL
/// Lock-free and concurrent; last write wins on the same key
pub struct MokaStore {
    cache: Cache<InstanceId, StoredEntry>,
}

impl MokaStore {
    /// Create a new unbounded store
    pub fn new_unbounded() -> Self {
        Self::new("instance-cache".to_string(), None)
    }

    /// Create a new store holding at most `max_entries`
    pub fn new_bounded(max_entries: u64) -> Self {
        Self::new("instance-cache".to_string(), Some(max_entries))
    }

    pub fn new(name: String, max_entries: Option<u64>) -> Self {
        let mut builder = Cache::builder().name(&name).expire_after(PerEntryTtl);

        if let Some(capacity) = max_entries {
            builder = builder.max_capacity(capacity);
        }

        Self {
            cache: builder.build(),
        }
    }

    /// Approximate; pending evictions may not be reflected yet
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for MokaStore {
    fn default() -> Self {
        Self::new_unbounded()
    }
}

#[async_trait]
impl CacheStore for MokaStore {
    async fn set(&self, key: &InstanceId, value: Vec<u8>, ttl: Duration) -> Result<()> {
        trace!("moka set '{}' ttl={:?}", key, ttl);
        let entry = StoredEntry {
            bytes: value.into(),
            ttl,
        };
        self.cache.insert(key.clone(), entry).await;
        Ok(())
    }

    async fn get(&self, key: &InstanceId) -> Result<Option<Vec<u8>>> {
        // Expired entries are never returned, even before eviction runs
        Ok(self.cache.get(key).await.map(|entry| entry.bytes.to_vec()))
    }

    async fn delete(&self, key: &InstanceId) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }
}

impl Debug for MokaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaStore")
            .field("name", &self.cache.name())
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
