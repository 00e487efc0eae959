//! Minimum-time search.
//!
//! Enumerates simple paths breadth-first from a FIFO queue and keeps the
//! quickest one that reaches the destination. The queue is not ordered by
//! cost, so the search drains it completely instead of stopping at the
//! first arrival.
//!
//! Each station's outgoing segments are expanded only the first time a
//! path ending there is dequeued, the destination included. Paths that
//! reach a station later are dropped there. This bounds the search but means the answer is the best
//! of the paths that survive pruning, not necessarily the global optimum.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::Network;

use super::config::RouteConfig;
use super::result::PathResult;
use super::search::{RouteSearch, endpoints_known};
use super::state::PathState;

/// Finds the quickest route; changing lines costs nothing.
pub struct MinTime<'a> {
    config: &'a RouteConfig,
}

impl<'a> MinTime<'a> {
    pub fn new(config: &'a RouteConfig) -> Self {
        Self { config }
    }
}

impl RouteSearch for MinTime<'_> {
    fn search(&self, network: &Network, start: &Station, end: &Station) -> PathResult {
        if !endpoints_known(network, start, end) {
            return PathResult::unreachable();
        }

        let mut queue = VecDeque::from([PathState::start(start.clone())]);
        let mut expanded: HashSet<Station> = HashSet::new();
        let mut best: Option<PathState> = None;
        let mut states_explored = 0usize;

        while let Some(state) = queue.pop_front() {
            states_explored += 1;

            if state.current() == end {
                if best.as_ref().is_none_or(|b| state.time < b.time) {
                    trace!(time = state.time, hops = state.legs.len(), "New quickest route");
                    best = Some(state.clone());
                }
            }

            if !expanded.insert(state.current().clone()) {
                continue;
            }

            for (neighbour, segment) in network.neighbours(state.current()) {
                if state.visits(neighbour) {
                    continue;
                }
                let hours = self.config.travel_hours(segment.length);
                queue.push_back(state.extend(neighbour, segment, hours));
            }
        }

        debug!(states_explored, found = best.is_some(), "Minimum-time search complete");

        match best {
            Some(state) => {
                let time = state.time;
                state.into_result(time)
            }
            None => PathResult::unreachable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::EdgeRecord;
    use crate::domain::LineId;
    use crate::network::BuildConfig;

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn network(edges: &[(&str, &str, u64, &str)]) -> Network {
        let records: Vec<EdgeRecord> = edges
            .iter()
            .map(|(a, b, len, l)| EdgeRecord::new("0", "0", *a, *b, len.to_string(), *l))
            .collect();
        Network::from_records(&records, BuildConfig::default()).network
    }

    fn run(network: &Network, from: &str, to: &str) -> PathResult {
        let config = RouteConfig::default();
        MinTime::new(&config).search(network, &st(from), &st(to))
    }

    #[test]
    fn three_station_line() {
        let network = network(&[("A", "B", 5000, "L1"), ("B", "C", 8000, "L2")]);

        let result = run(&network, "A", "C");

        assert_eq!(result.path, vec![st("A"), st("B"), st("C")]);
        assert_eq!(result.distance, Some(13_000));
        assert_eq!(
            result.lines,
            vec![LineId::parse("L1").unwrap(), LineId::parse("L2").unwrap()]
        );
        assert_eq!(result.transfer_count(), 1);
        // Transfers are free in this mode
        assert!((result.time.unwrap() - 13_000.0 / 80_000.0).abs() < 1e-9);
    }

    #[test]
    fn keeps_searching_after_first_arrival() {
        // The direct segment arrives first, the three-hop route is quicker
        let network = network(&[
            ("A", "D", 10_000, "L1"),
            ("A", "B", 3000, "L2"),
            ("B", "C", 3000, "L2"),
            ("C", "D", 3000, "L2"),
        ]);

        let result = run(&network, "A", "D");

        assert_eq!(result.path, vec![st("A"), st("B"), st("C"), st("D")]);
        assert_eq!(result.distance, Some(9000));
    }

    #[test]
    fn stations_expand_only_on_first_visit() {
        // X is first reached directly (10 km); the later 2 km path via Y
        // is not expanded past X, so A-Y-X-Z is never considered.
        let network = network(&[
            ("A", "X", 10_000, "L1"),
            ("A", "Y", 1000, "L1"),
            ("Y", "X", 1000, "L1"),
            ("X", "Z", 1000, "L1"),
        ]);

        let result = run(&network, "A", "Z");

        assert_eq!(result.path, vec![st("A"), st("X"), st("Z")]);
        assert_eq!(result.distance, Some(11_000));
    }

    #[test]
    fn destination_is_expanded_like_any_station() {
        // A-C arrives first and goes on to claim X, so A-M-X-C dies at X
        let network = network(&[
            ("A", "C", 100_000, "L1"),
            ("A", "M", 1000, "L2"),
            ("M", "X", 1000, "L2"),
            ("X", "C", 1000, "L2"),
        ]);

        let result = run(&network, "A", "C");

        assert_eq!(result.path, vec![st("A"), st("C")]);
        assert_eq!(result.distance, Some(100_000));
    }

    #[test]
    fn transfers_do_not_cost_time() {
        // A-B-C changes line twice but is shorter than the single-line route
        let network = network(&[
            ("A", "B", 1000, "L1"),
            ("B", "C", 1000, "L2"),
            ("A", "D", 2000, "L3"),
            ("D", "C", 2000, "L3"),
        ]);

        let result = run(&network, "A", "C");

        assert_eq!(result.path, vec![st("A"), st("B"), st("C")]);
        assert_eq!(result.transfer_count(), 1);
    }

    #[test]
    fn same_start_and_end() {
        let network = network(&[("A", "B", 5000, "L1")]);

        let result = run(&network, "B", "B");

        assert_eq!(result.path, vec![st("B")]);
        assert_eq!(result.distance, Some(0));
        assert_eq!(result.time, Some(0.0));
        assert!(result.lines.is_empty());
    }

    #[test]
    fn disconnected_is_unreachable() {
        let network = network(&[("A", "B", 5000, "L1"), ("C", "D", 5000, "L2")]);
        assert_eq!(run(&network, "A", "C"), PathResult::unreachable());
        assert_eq!(run(&network, "A", "nowhere"), PathResult::unreachable());
    }
}
