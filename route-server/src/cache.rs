//! Caching layer for route queries.
//!
//! The network is built once at startup and every search is deterministic,
//! so a result stays valid for the life of the process. The TTL only bounds
//! how long rarely repeated queries hold memory.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::task::JoinError;
use tracing::trace;

use crate::domain::Station;
use crate::network::Network;
use crate::planner::{self, PathResult, RouteConfig, SearchMode};

/// Cache key for route results: (start, end, mode).
pub type RouteKey = (Station, Station, SearchMode);

/// Cached route result.
type RouteEntry = Arc<PathResult>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// Cache for route search results.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached route.
    pub async fn get(&self, key: &RouteKey) -> Option<RouteEntry> {
        self.routes.get(key).await
    }

    /// Insert a route into the cache.
    pub async fn insert(&self, key: RouteKey, entry: RouteEntry) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Route planner with caching.
///
/// Owns the shared network and runs searches on the blocking thread pool,
/// since the exhaustive strategies can take a while on dense networks.
pub struct CachedPlanner {
    network: Arc<Network>,
    config: Arc<RouteConfig>,
    cache: RouteCache,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(network: Network, config: RouteConfig, cache_config: &CacheConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            cache: RouteCache::new(cache_config),
        }
    }

    /// The network searched by this planner.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Find a route, using the cache if available.
    ///
    /// Fails only if the search task panicked.
    pub async fn route(
        &self,
        start: &Station,
        end: &Station,
        mode: SearchMode,
    ) -> Result<RouteEntry, JoinError> {
        let key = (start.clone(), end.clone(), mode);

        // Try cache first
        if let Some(cached) = self.cache.get(&key).await {
            trace!(%start, %end, %mode, "Route cache hit");
            return Ok(cached);
        }

        let network = Arc::clone(&self.network);
        let config = Arc::clone(&self.config);
        let (from, to) = (start.clone(), end.clone());
        let result = tokio::task::spawn_blocking(move || {
            planner::search(&network, &from, &to, mode, &config)
        })
        .await?;

        let entry = Arc::new(result);
        self.cache.insert(key, entry.clone()).await;
        Ok(entry)
    }

    /// Number of cached routes.
    pub fn cached_routes(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop every cached route.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }
}
