//! # Query Cache
//!
//! Request deduplication and caching for remote queries, keyed by [`QueryKey`].
//!
//! One [`QueryCache`] is built at startup and shared by `Arc` with every
//! consumer. There is no ambient global store.
//!
//! ## Semantics
//!
//! - **Fresh hit**: data younger than `stale_time` (and not invalidated) is
//!   returned without touching the network.
//! - **At most one request per key**: while a fetch for a key is in flight,
//!   later callers subscribe to the same result instead of issuing their own.
//! - **Detached fetches**: the fetch runs in its own tokio task. Dropping a
//!   subscriber (a screen going away) never cancels the network call; the
//!   result still lands in the cache.
//! - **Retry**: a failing fetcher is retried `retry` times with exponential
//!   backoff (`retry_base_delay * 2^attempt`, capped at `retry_max_delay`).
//! - **Garbage collection**: entries not read or written for `cache_time` are
//!   evicted by [`QueryCache::collect_garbage`].
//!
//! ```text
//!  fetch(key) ──► fresh entry? ──yes──► Arc<T>
//!                     │ no
//!                     ▼
//!              in flight for key? ──yes──► await shared future
//!                     │ no
//!                     ▼
//!              tokio::spawn(fetch + retry) ──► store entry ──► Arc<T>
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Weak};
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::core::error::{AppError, Result};

type Payload = Arc<dyn Any + Send + Sync>;
type QueryResult = std::result::Result<Payload, AppError>;
type InFlight = Shared<BoxFuture<'static, QueryResult>>;

/// Identifier of a cached query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Chains,
    Protocols,
    Protocol(String),
    Tvl,
    /// Global history when `None`, single chain otherwise
    HistoricalChainTvl(Option<String>),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Chains => write!(f, "chains"),
            QueryKey::Protocols => write!(f, "protocols"),
            QueryKey::Protocol(slug) => write!(f, "protocol/{}", slug),
            QueryKey::Tvl => write!(f, "tvl"),
            QueryKey::HistoricalChainTvl(None) => write!(f, "historicalChainTvl"),
            QueryKey::HistoricalChainTvl(Some(chain)) => write!(f, "historicalChainTvl/{}", chain),
        }
    }
}

/// Static cache policy, supplied once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Age after which cached data is refetched on the next request
    pub stale_time: Duration,
    /// Idle time after which an entry is evicted
    pub cache_time: Duration,
    /// Extra attempts after the first failure
    pub retry: u32,
    pub retry_base_delay: Duration,
    pub retry_max_delay: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            cache_time: Duration::from_secs(10 * 60),
            retry: 2,
            retry_base_delay: Duration::from_secs(1),
            retry_max_delay: Duration::from_secs(30),
        }
    }
}

impl CacheConfig {
    /// Backoff before retry number `attempt + 1`
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.retry_base_delay
            .saturating_mul(factor)
            .min(self.retry_max_delay)
    }
}

struct Entry {
    data: Payload,
    updated_at: Instant,
    last_accessed: Instant,
    invalidated: bool,
}

impl Entry {
    fn new(data: Payload) -> Self {
        let now = Instant::now();
        Self {
            data,
            updated_at: now,
            last_accessed: now,
            invalidated: false,
        }
    }

    fn is_stale(&self, stale_time: Duration) -> bool {
        self.invalidated || self.updated_at.elapsed() >= stale_time
    }
}

#[derive(Default)]
struct Inner {
    entries: HashMap<QueryKey, Entry>,
    in_flight: HashMap<QueryKey, InFlight>,
}

/// Shared query cache service
pub struct QueryCache {
    config: CacheConfig,
    inner: Arc<Mutex<Inner>>,
}

impl QueryCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Return cached data for `key`, fetching it when missing or stale.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let pending = {
            let mut inner = self.inner.lock();

            if let Some(entry) = inner.entries.get_mut(&key) {
                if !entry.is_stale(self.config.stale_time) {
                    entry.last_accessed = Instant::now();
                    tracing::trace!(key = %key, "Query cache hit");
                    return downcast::<T>(&key, entry.data.clone());
                }
            }

            match inner.in_flight.get(&key) {
                Some(existing) => {
                    tracing::debug!(key = %key, "Joining in-flight query");
                    existing.clone()
                }
                None => {
                    tracing::debug!(key = %key, "Query cache miss, fetching");
                    let pending = self.spawn_fetch(key.clone(), fetcher);
                    inner.in_flight.insert(key.clone(), pending.clone());
                    pending
                }
            }
        }; // Lock released before awaiting

        let payload = pending.await?;
        downcast::<T>(&key, payload)
    }

    /// Mark `key` stale and fetch it again (joining any request already in flight).
    pub async fn refetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.invalidate(&key);
        self.fetch(key, fetcher).await
    }

    /// Cached data for `key` regardless of staleness.
    pub fn get<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let mut inner = self.inner.lock();
        let entry = inner.entries.get_mut(key)?;
        entry.last_accessed = Instant::now();
        entry.data.clone().downcast::<T>().ok()
    }

    /// Seed or overwrite cached data for `key`; the entry starts fresh.
    pub fn set<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        let mut inner = self.inner.lock();
        inner.entries.insert(key, Entry::new(Arc::new(value)));
    }

    /// Whether `key` would hit the network on the next fetch.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        let inner = self.inner.lock();
        inner
            .entries
            .get(key)
            .map_or(true, |entry| entry.is_stale(self.config.stale_time))
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.inner.lock().in_flight.contains_key(key)
    }

    /// Mark `key` stale; cached data stays readable through [`QueryCache::get`].
    pub fn invalidate(&self, key: &QueryKey) {
        if let Some(entry) = self.inner.lock().entries.get_mut(key) {
            entry.invalidated = true;
            tracing::debug!(key = %key, "Query invalidated");
        }
    }

    pub fn remove(&self, key: &QueryKey) {
        self.inner.lock().entries.remove(key);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evict entries idle for at least `cache_time`. Returns the number evicted.
    pub fn collect_garbage(&self) -> usize {
        let cache_time = self.config.cache_time;
        let mut inner = self.inner.lock();
        let before = inner.entries.len();
        inner
            .entries
            .retain(|_, entry| entry.last_accessed.elapsed() < cache_time);
        let evicted = before - inner.entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = inner.entries.len(), "Query cache garbage collected");
        }
        evicted
    }

    /// Run [`QueryCache::collect_garbage`] periodically until the cache is dropped.
    pub fn start_garbage_collector(self: &Arc<Self>, every: Duration) {
        let weak: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match weak.upgrade() {
                    Some(cache) => {
                        cache.collect_garbage();
                    }
                    None => break,
                }
            }
        });
    }

    /// Spawn the fetch task for `key`. Caller holds the lock and registers the result.
    fn spawn_fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> InFlight
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let config = self.config.clone();
        let task_key = key.clone();

        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let result = fetch_with_retry(&config, &task_key, fetcher)
                .await
                .map(|value| Arc::new(value) as Payload);

            let mut inner = inner.lock();
            inner.in_flight.remove(&task_key);
            if let Ok(data) = &result {
                inner.entries.insert(task_key.clone(), Entry::new(data.clone()));
                tracing::debug!(
                    key = %task_key,
                    duration_ms = start.elapsed().as_millis(),
                    "Query stored"
                );
            }
            result
        });

        let cleanup = Arc::clone(&self.inner);
        async move {
            match handle.await {
                Ok(result) => result,
                Err(join_err) => {
                    cleanup.lock().in_flight.remove(&key);
                    tracing::error!(key = %key, error = %join_err, "Query task aborted");
                    Err(AppError::Cache(format!("fetch task for {} failed: {}", key, join_err)))
                }
            }
        }
        .boxed()
        .shared()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

async fn fetch_with_retry<T, F, Fut>(config: &CacheConfig, key: &QueryKey, fetcher: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        let attempt_future = fetcher();
        match attempt_future.await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < config.retry => {
                let delay = config.retry_delay(attempt);
                tracing::warn!(
                    key = %key,
                    attempt = attempt + 1,
                    max_retries = config.retry,
                    delay_ms = delay.as_millis(),
                    error = %e,
                    "Query failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(key = %key, attempts = attempt + 1, error = %e, "Query failed");
                return Err(e);
            }
        }
    }
}

fn downcast<T: Send + Sync + 'static>(key: &QueryKey, payload: Payload) -> Result<Arc<T>> {
    payload.downcast::<T>().map_err(|_| {
        AppError::Cache(format!(
            "cached value for {} is not a {}",
            key,
            std::any::type_name::<T>()
        ))
    })
}
