//! Minimum-transfers search.
//!
//! Same breadth-first enumeration and first-visit pruning as the
//! minimum-time search, but a candidate at the destination wins when it
//! changes line strictly fewer times.
//!
//! Time is accumulated twice with different transfer penalties. While
//! searching, every change of line adds the large search penalty. Once a
//! route is chosen its time is recomputed from scratch with the smaller
//! report penalty, and that is the time returned.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::Network;

use super::config::RouteConfig;
use super::result::PathResult;
use super::search::{RouteSearch, endpoints_known};
use super::state::PathState;

/// Finds the route with the fewest line changes.
pub struct MinTransfers<'a> {
    config: &'a RouteConfig,
}

impl<'a> MinTransfers<'a> {
    pub fn new(config: &'a RouteConfig) -> Self {
        Self { config }
    }

    /// Time of a finished route: travel time plus the report penalty at
    /// every change of line.
    fn reported_time(&self, state: &PathState) -> f64 {
        let mut time = 0.0;
        let mut previous = None;
        for leg in &state.legs {
            time += self.config.travel_hours(leg.length);
            if previous.is_some_and(|line| line != &leg.line) {
                time += self.config.report_transfer_penalty_hours;
            }
            previous = Some(&leg.line);
        }
        time
    }
}

impl RouteSearch for MinTransfers<'_> {
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
                if best.as_ref().is_none_or(|b| state.transfers < b.transfers) {
                    trace!(
                        transfers = state.transfers,
                        search_time = state.time,
                        "New fewest-transfers route"
                    );
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
                let mut hours = self.config.travel_hours(segment.length);
                if state.changes_line(segment) {
                    hours += self.config.search_transfer_penalty_hours;
                }
                queue.push_back(state.extend(neighbour, segment, hours));
            }
        }

        debug!(states_explored, found = best.is_some(), "Minimum-transfers search complete");

        match best {
            Some(state) => {
                let time = self.reported_time(&state);
                state.into_result(time)
            }
            None => PathResult::unreachable(),
        }
    }
}
