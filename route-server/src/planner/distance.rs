//! Minimum-distance search.
//!
//! A label-setting search over the whole station set: the unvisited station
//! with the smallest known distance is settled next, found by a linear scan.
//! That is O(V²) overall, which is fine for a metro-sized network and keeps
//! the tie-break rule easy to state.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{LineId, Station};
use crate::network::Network;

use super::config::RouteConfig;
use super::result::PathResult;
use super::search::{RouteSearch, endpoints_known};

/// Best known way of reaching one station.
#[derive(Debug, Clone, Default)]
struct Label {
    /// `None` until the station is reached.
    distance: Option<u64>,
    time: f64,
    path: Vec<Station>,
    lines: Vec<LineId>,
}

impl Label {
    /// Whether arriving with `distance` and `time` beats this label.
    ///
    /// Distance decides; time only breaks exact distance ties.
    fn improved_by(&self, distance: u64, time: f64) -> bool {
        match self.distance {
            None => true,
            Some(best) => distance < best || (distance == best && time < self.time),
        }
    }
}

/// Finds the route with the smallest total length.
///
/// Reported time is travel time plus the distance-mode transfer penalty at
/// every change of line. Stations are scanned in name order, so between
/// stations at equal distance the alphabetically first is settled first.
pub struct MinDistance<'a> {
    config: &'a RouteConfig,
}

impl<'a> MinDistance<'a> {
    pub fn new(config: &'a RouteConfig) -> Self {
        Self { config }
    }
}

impl RouteSearch for MinDistance<'_> {
    fn search(&self, network: &Network, start: &Station, end: &Station) -> PathResult {
        if !endpoints_known(network, start, end) {
            return PathResult::unreachable();
        }

        let stations: Vec<&Station> = network.stations().collect();
        let index: HashMap<&Station, usize> =
            stations.iter().enumerate().map(|(i, s)| (*s, i)).collect();

        let mut labels = vec![Label::default(); stations.len()];
        let mut unvisited = vec![true; stations.len()];

        if let Some(&s) = index.get(start) {
            labels[s] = Label {
                distance: Some(0),
                time: 0.0,
                path: vec![start.clone()],
                lines: Vec::new(),
            };
        }

        while let Some(u) = closest_unvisited(&labels, &unvisited) {
            unvisited[u] = false;
            let current = labels[u].clone();
            let Some(current_distance) = current.distance else {
                break;
            };

            trace!(station = %stations[u], distance = current_distance, "Settling station");

            for (neighbour, segment) in network.neighbours(stations[u]) {
                let Some(&v) = index.get(neighbour) else {
                    continue;
                };

                let penalty = match current.lines.last() {
                    Some(line) if *line != segment.line => {
                        self.config.distance_transfer_penalty_hours
                    }
                    _ => 0.0,
                };
                let distance = current_distance + segment.length;
                let time = current.time + self.config.travel_hours(segment.length) + penalty;

                if labels[v].improved_by(distance, time) {
                    let mut path = current.path.clone();
                    path.push(neighbour.clone());
                    let mut lines = current.lines.clone();
                    lines.push(segment.line.clone());

                    labels[v] = Label {
                        distance: Some(distance),
                        time,
                        path,
                        lines,
                    };
                }
            }
        }

        let Some(&e) = index.get(end) else {
            return PathResult::unreachable();
        };
        let label = std::mem::take(&mut labels[e]);
        match label.distance {
            Some(distance) => PathResult::new(label.path, distance, label.time, label.lines),
            None => PathResult::unreachable(),
        }
    }
}

/// Index of the unvisited station with the smallest finite distance.
///
/// Ties go to the lowest index.
fn closest_unvisited(labels: &[Label], unvisited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, label) in labels.iter().enumerate() {
        if !unvisited[i] {
            continue;
        }
        let Some(distance) = label.distance else {
            continue;
        };
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}
