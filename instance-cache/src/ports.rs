#![deny(clippy::all)]

use crate::domain::InstanceId;
use async_trait::async_trait;
use shared::Result;
use std::time::Duration;

// Ports are the pluggable extension points for underlying cache implementations

/// Port for the external key-value store backing the facade
///
/// Values arrive already serialized. Implementations own expiry: an entry
/// written with `ttl` must stop being returned by `get` once it elapses,
/// and a second `set` on the same key replaces the value and its expiry.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    async fn set(&self, key: &InstanceId, value: Vec<u8>, ttl: Duration) -> Result<()>;

    /// `Ok(None)` for a missing or expired key
    async fn get(&self, key: &InstanceId) -> Result<Option<Vec<u8>>>;

    /// Returns whether an entry was removed
    async fn delete(&self, key: &InstanceId) -> Result<bool>;
}
