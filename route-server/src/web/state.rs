//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedPlanner};
use crate::dataset::AttractionIndex;
use crate::network::Network;
use crate::planner::RouteConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached route planner over the loaded network
    pub planner: Arc<CachedPlanner>,

    /// Attraction names accepted in place of station names
    pub attractions: Arc<AttractionIndex>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: Network,
        attractions: AttractionIndex,
        config: RouteConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            planner: Arc::new(CachedPlanner::new(network, config, cache_config)),
            attractions: Arc::new(attractions),
        }
    }

    /// The loaded network.
    pub fn network(&self) -> &Network {
        self.planner.network()
    }
}
