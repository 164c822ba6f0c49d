// Time-windowed response cache.
// Serves stored values while fresh and refetches through the caller's fetcher once stale.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::Result;

use super::store::Store;

/// Default freshness window: one minute.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Persisted form of a cached value: `{"time": <epoch-millis>, "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// When the data was fetched, in epoch milliseconds.
    pub time: i64,
    /// The fetched data, stored verbatim.
    pub data: T,
}

impl<T> CachedData<T> {
    pub fn new(data: T, time: i64) -> Self {
        Self { time, data }
    }

    /// Distance between `now` and the fetch time, in either direction.
    pub fn age_millis(&self, now: i64) -> u64 {
        now.abs_diff(self.time)
    }

    /// Whether the entry is still inside the `ttl` window at `now`.
    pub fn is_fresh(&self, now: i64, ttl: Duration) -> bool {
        u128::from(self.age_millis(now)) < ttl.as_millis()
    }
}

/// Cache keyed by request URL over an injected store and clock.
#[derive(Clone)]
pub struct TimedCache {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl TimedCache {
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create a cache that reads the wall clock.
    pub fn with_system_clock(store: Arc<dyn Store>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// The backing store, shared with anything else persisted alongside the cache.
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Read the entry for `key`, treating missing or unreadable entries as absent.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("cache read failed for {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("ignoring corrupt cache entry for {}: {}", key, e);
                None
            }
        }
    }

    /// Return the value for `key`, calling `fetcher` when there is no fresh entry.
    ///
    /// A fetcher error is returned as-is and leaves the stored entry untouched;
    /// a stale entry is never served in its place. Concurrent calls for the same
    /// key are not de-duplicated and the last write wins.
    pub async fn get<T, F, Fut>(&self, key: &str, fetcher: F, ttl: Duration) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let now = self.clock.now_millis();

        if let Some(entry) = self.read::<T>(key).filter(|e| e.is_fresh(now, ttl)) {
            debug!("cache hit for {}", key);
            return Ok(entry.data);
        }

        debug!("cache miss for {}", key);
        let data = fetcher().await?;

        let json = serde_json::to_string(&CachedData::new(&data, now))?;
        self.store.set_item(key, json)?;

        Ok(data)
    }
}
