//! Request-scoped resolution cache
//!
//! Page metadata generation and page body rendering are independent
//! call sites that both need the resolved packet for the same incoming
//! request. One cache instance is created per inbound request and
//! memoizes `resolve` by the composite raw key, so the two call sites
//! trigger exactly one resolution; concurrent callers coalesce onto a
//! single in-flight computation.

use crate::config::ResolverConfig;
use crate::resolver::ProjectResolver;
use caselink_model::{RequestKey, ResolvedPacket, ShareRequest};
use moka::future::Cache;
use std::time::Duration;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Memoizes share-request resolution for one request lifetime
#[derive(Debug, Clone)]
pub struct ShareRequestCache {
    inner: Cache<RequestKey, ResolvedPacket>,
}

impl ShareRequestCache {
    /// Create a cache with a max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Create a cache with time-based expiration
    #[inline]
    #[must_use]
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Create a cache sized per configuration
    #[must_use]
    pub fn for_config(config: &ResolverConfig) -> Self {
        match config.cache_ttl() {
            Some(ttl) => Self::with_ttl(config.cache_capacity, ttl),
            None => Self::new(config.cache_capacity),
        }
    }

    /// Resolve through the cache.
    ///
    /// The first caller for a key runs the resolver; every other
    /// caller with the same composite key (raw slug path, raw payload
    /// blob) gets the memoized packet, including callers that arrive
    /// while the first resolution is still in flight.
    pub async fn resolve(
        &self,
        resolver: &ProjectResolver,
        request: &ShareRequest,
    ) -> ResolvedPacket {
        self.inner
            .get_with(request.cache_key(), resolver.resolve(request))
            .await
    }

    /// Look up a memoized packet without resolving
    #[must_use]
    pub async fn get(&self, key: &RequestKey) -> Option<ResolvedPacket> {
        self.inner.get(key).await
    }

    /// Drop every memoized packet
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for ShareRequestCache {
    /// A cache sized for one request's render phases
    fn default() -> Self {
        Self::for_config(&ResolverConfig::default())
    }
}
