//! Async memoization
//!
//! Wraps an async function with a result cache owned by the wrapper (built
//! at wrap time, never process-global). Keys default to the serde_json
//! serialization of the argument; entries past their TTL are treated as
//! absent and lazily evicted on the next lookup.
//!
//! Caveats, by design rather than oversight:
//! - the cache is unbounded -- no size cap, no LRU;
//! - concurrent misses on the same key all execute (no stampede guard);
//!   last writer wins the slot;
//! - only successful results are cached, errors propagate uncached.

use std::future::Future;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Serialize;
use tracing::trace;

type KeyGenerator<A> = Box<dyn Fn(&A) -> String + Send + Sync>;

/// Options for [`Memoized::with_options`].
pub struct MemoizeOptions<A> {
    ttl: Option<Duration>,
    key_generator: Option<KeyGenerator<A>>,
}

impl<A> Default for MemoizeOptions<A> {
    fn default() -> Self {
        Self {
            ttl: None,
            key_generator: None,
        }
    }
}

impl<A> MemoizeOptions<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries older than `ttl` are refreshed on next lookup.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Replace the default serde_json key serialization.
    pub fn with_key_generator<G>(mut self, generator: G) -> Self
    where
        G: Fn(&A) -> String + Send + Sync + 'static,
    {
        self.key_generator = Some(Box::new(generator));
        self
    }
}

struct CacheEntry<T> {
    value: T,
    stored_at: Instant,
}

/// Memoizing wrapper around an async function.
pub struct Memoized<A, F, T> {
    func: F,
    cache: DashMap<String, CacheEntry<T>>,
    ttl: Option<Duration>,
    key_generator: Option<KeyGenerator<A>>,
}

impl<A, F, T> Memoized<A, F, T> {
    pub fn new(func: F) -> Self {
        Self::with_options(func, MemoizeOptions::default())
    }

    pub fn with_options(func: F, options: MemoizeOptions<A>) -> Self {
        Self {
            func,
            cache: DashMap::new(),
            ttl: options.ttl,
            key_generator: options.key_generator,
        }
    }

    fn key_for(&self, arg: &A) -> String
    where
        A: Serialize,
    {
        match &self.key_generator {
            Some(generator) => generator(arg),
            // Serialization failure collapses onto one shared key; supply a
            // key generator for argument types serde_json cannot represent.
            None => serde_json::to_string(arg)
                .unwrap_or_else(|_| "<non-serializable>".to_string()),
        }
    }

    /// Call through the cache.
    pub async fn call<Fut, E>(&self, arg: A) -> Result<T, E>
    where
        A: Serialize,
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        T: Clone,
    {
        let key = self.key_for(&arg);

        let cached = self.cache.get(&key).and_then(|entry| {
            let fresh = self
                .ttl
                .map_or(true, |ttl| entry.stored_at.elapsed() < ttl);
            fresh.then(|| entry.value.clone())
        });
        if let Some(value) = cached {
            trace!(%key, "memoize cache hit");
            return Ok(value);
        }

        // Lazy eviction of the stale entry, if any.
        if let Some(ttl) = self.ttl {
            self.cache
                .remove_if(&key, |_, entry| entry.stored_at.elapsed() >= ttl);
        }

        trace!(%key, "memoize cache miss");
        let value = (self.func)(arg).await?;
        self.cache.insert(
            key,
            CacheEntry {
                value: value.clone(),
                stored_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// Number of cached entries (stale entries included until next lookup).
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn second_call_hits_the_cache() {
        let executions = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&executions);

        let memo = Memoized::new(move |n: u32| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, String>(n * n)
            }
        });

        assert_eq!(memo.call(4).await.unwrap(), 16);
        assert_eq!(memo.call(4).await.unwrap(), 16);
        assert_eq!(executions.load(Ordering::SeqCst), 1);

        // different argument, different key
        assert_eq!(memo.call(5).await.unwrap(), 25);
        assert_eq!(executions.load(Ordering::SeqCst), 2);
        assert_eq!(memo.len(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let executions = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&executions);

        let memo = Memoized::new(move |n: u32| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err("first call fails".to_string())
                } else {
                    Ok(n)
                }
            }
        });

        assert!(memo.call(1).await.is_err());
        assert!(memo.is_empty());
        assert_eq!(memo.call(1).await.unwrap(), 1);
        assert_eq!(executions.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn ttl_expiry_refreshes() {
        let executions = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&executions);

        let memo = Memoized::with_options(
            move |n: u32| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<u32, String>(n)
                }
            },
            MemoizeOptions::new().with_ttl(Duration::from_millis(20)),
        );

        assert_eq!(memo.call(1).await.unwrap(), 1);
        assert_eq!(memo.call(1).await.unwrap(), 1);
        assert_eq!(executions.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(memo.call(1).await.unwrap(), 1);
        assert_eq!(executions.load(Ordering::SeqCst), 2);
        // refreshed entry replaced the stale one
        assert_eq!(memo.len(), 1);
    }

    #[tokio::test]
    async fn custom_key_generator_controls_identity() {
        let executions = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&executions);

        // Key on parity: 2 and 4 share a cache slot.
        let memo = Memoized::with_options(
            move |n: u32| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<u32, String>(n)
                }
            },
            MemoizeOptions::new().with_key_generator(|n: &u32| (n % 2).to_string()),
        );

        assert_eq!(memo.call(2).await.unwrap(), 2);
        assert_eq!(memo.call(4).await.unwrap(), 2); // cached under the same key
        assert_eq!(executions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn clear_empties_the_cache() {
        let memo = Memoized::new(|n: u32| async move { Ok::<u32, String>(n) });
        memo.call(1).await.unwrap();
        memo.call(2).await.unwrap();
        assert_eq!(memo.len(), 2);
        memo.clear();
        assert!(memo.is_empty());
    }
}
