//! Partial paths explored by the queue-based strategies.

use crate::domain::{LineId, Station};
use crate::network::Segment;

use super::result::PathResult;

/// A partial path from the start station, as held in the work queue.
#[derive(Debug, Clone)]
pub(super) struct PathState {
    /// Stations visited so far, start first.
    pub path: Vec<Station>,

    /// Segments taken; `legs[i]` joins `path[i]` and `path[i + 1]`.
    pub legs: Vec<Segment>,

    /// Accumulated time (hours).
    pub time: f64,

    /// Accumulated length (metres).
    pub distance: u64,

    /// Line changes so far.
    pub transfers: usize,
}

impl PathState {
    /// The zero-length path standing at `start`.
    pub fn start(start: Station) -> Self {
        Self {
            path: vec![start],
            legs: Vec::new(),
            time: 0.0,
            distance: 0,
            transfers: 0,
        }
    }

    /// Station at the end of the path.
    pub fn current(&self) -> &Station {
        // `path` always holds at least the start station
        &self.path[self.path.len() - 1]
    }

    /// Whether the path already passes through `station`.
    pub fn visits(&self, station: &Station) -> bool {
        self.path.contains(station)
    }

    /// Line of the last segment, if any segment has been taken.
    pub fn last_line(&self) -> Option<&LineId> {
        self.legs.last().map(|leg| &leg.line)
    }

    /// Whether taking `segment` next would change lines.
    pub fn changes_line(&self, segment: &Segment) -> bool {
        self.last_line().is_some_and(|line| *line != segment.line)
    }

    /// The path extended by one segment to `next`, costing `hours`.
    pub fn extend(&self, next: &Station, segment: &Segment, hours: f64) -> Self {
        let mut path = self.path.clone();
        path.push(next.clone());
        let mut legs = self.legs.clone();
        legs.push(segment.clone());

        Self {
            path,
            legs,
            time: self.time + hours,
            distance: self.distance + segment.length,
            transfers: self.transfers + usize::from(self.changes_line(segment)),
        }
    }

    /// Convert into a result reporting `time` hours.
    pub fn into_result(self, time: f64) -> PathResult {
        let lines = self.legs.into_iter().map(|leg| leg.line).collect();
        PathResult::new(self.path, self.distance, time, lines)
    }
}
