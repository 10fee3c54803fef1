use crate::domain::InstanceId;
use crate::ports::CacheStore;
use crate::snapshot;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::config::Config;
use shared::{Error, Result, TtlSecs};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Store/fetch/delete of value sequences keyed by [`InstanceId`]
///
/// Holds only a default TTL and the injected store. Cloning is cheap and
/// shares the store.
#[derive(Clone)]
pub struct CacheFacade {
    store: Arc<dyn CacheStore>,
    default_ttl: TtlSecs,
}

impl CacheFacade {
    /// `ttl` may be an integer or its string form (`60` and `"60"` are the same).
    /// Anything that is not a positive integer is an [`Error::Configuration`].
    pub fn new<T>(store: Arc<dyn CacheStore>, ttl: T) -> Result<Self>
    where
        T: TryInto<TtlSecs, Error = Error>,
    {
        Ok(Self {
            store,
            default_ttl: ttl.try_into()?,
        })
    }

    pub fn from_config(store: Arc<dyn CacheStore>, config: &Config) -> Self {
        Self {
            store,
            default_ttl: config.default_ttl,
        }
    }

    pub fn default_ttl(&self) -> TtlSecs {
        self.default_ttl
    }

    /// Write `value` under `id`, replacing any existing entry and its expiry
    pub async fn add_instance<T>(
        &self,
        id: impl Into<InstanceId>,
        value: &[T],
        ttl: Option<TtlSecs>,
    ) -> Result<()>
    where
        T: Serialize,
    {
        let id = id.into();
        let ttl = ttl.unwrap_or(self.default_ttl);
        let bytes = snapshot::encode(value)?;

        debug!(
            "Caching {} item(s) ({} bytes) under '{}' for {}",
            value.len(),
            bytes.len(),
            id,
            ttl
        );

        self.store.set(&id, bytes, ttl.as_duration()).await
    }

    /// `None` when nothing live is stored under `id`
    pub async fn get_instance<T>(&self, id: impl Into<InstanceId>) -> Result<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        let id = id.into();
        match self.store.get(&id).await? {
            Some(bytes) => {
                debug!("Cache hit for '{}'", id);
                snapshot::decode(&bytes).map(Some)
            }
            None => {
                debug!("Cache miss for '{}'", id);
                Ok(None)
            }
        }
    }

    /// Remove whatever is stored under `id`; a missing key is not an error
    pub async fn delete_instance(&self, id: impl Into<InstanceId>) -> Result<bool> {
        let id = id.into();
        let deleted = self.store.delete(&id).await?;
        debug!("Delete '{}' (existed: {})", id, deleted);
        Ok(deleted)
    }
}

impl Debug for CacheFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheFacade")
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
