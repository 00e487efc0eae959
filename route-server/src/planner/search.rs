//! The strategy interface and mode dispatch.

use tracing::debug;

use crate::domain::Station;
use crate::network::Network;

use super::config::RouteConfig;
use super::distance::MinDistance;
use super::mode::SearchMode;
use super::result::PathResult;
use super::time::MinTime;
use super::transfers::MinTransfers;

/// A route search strategy.
///
/// Strategies never fail: an unknown station or a destination that cannot
/// be reached yields [`PathResult::unreachable`].
pub trait RouteSearch {
    fn search(&self, network: &Network, start: &Station, end: &Station) -> PathResult;
}

/// The strategy implementing `mode`.
pub fn strategy_for(mode: SearchMode, config: &RouteConfig) -> Box<dyn RouteSearch + '_> {
    match mode {
        SearchMode::Distance => Box::new(MinDistance::new(config)),
        SearchMode::Time => Box::new(MinTime::new(config)),
        SearchMode::Transfers => Box::new(MinTransfers::new(config)),
    }
}

/// Run one route query.
pub fn search(
    network: &Network,
    start: &Station,
    end: &Station,
    mode: SearchMode,
    config: &RouteConfig,
) -> PathResult {
    let result = strategy_for(mode, config).search(network, start, end);
    debug!(
        %start,
        %end,
        %mode,
        reachable = result.is_reachable(),
        distance = ?result.distance,
        transfers = result.transfer_count(),
        "Route search complete"
    );
    result
}

/// Whether both endpoints exist; logs when they do not.
pub(super) fn endpoints_known(network: &Network, start: &Station, end: &Station) -> bool {
    let known = network.contains(start) && network.contains(end);
    if !known {
        debug!(%start, %end, "Unknown endpoint, route unreachable");
    }
    known
}
