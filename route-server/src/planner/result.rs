//! The common result shape of every search strategy.

use serde::Serialize;

use crate::domain::{LineId, Station};
use crate::fare;

/// A change of line at a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    /// Station where the change happens.
    pub at: Station,
    /// Line arrived on.
    pub from: LineId,
    /// Line departed on.
    pub to: LineId,
}

/// Outcome of a route search.
///
/// An unreachable destination is not an error: `distance` and `time` are
/// `None` and all sequences are empty. Check [`PathResult::is_reachable`]
/// before using the numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Stations from start to end inclusive.
    pub path: Vec<Station>,

    /// Total length in metres.
    pub distance: Option<u64>,

    /// Travel time plus transfer costs, in hours.
    pub time: Option<f64>,

    /// Line of each segment; `lines[i]` runs from `path[i]` to `path[i + 1]`.
    pub lines: Vec<LineId>,

    /// Line changes along the path, in order.
    pub transfers: Vec<Transfer>,
}

impl PathResult {
    /// The "no route" result.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: None,
            time: None,
            lines: Vec::new(),
            transfers: Vec::new(),
        }
    }

    /// Build a result, deriving the transfers from the line sequence.
    pub fn new(path: Vec<Station>, distance: u64, time: f64, lines: Vec<LineId>) -> Self {
        let transfers = transfers_along(&path, &lines);
        Self {
            path,
            distance: Some(distance),
            time: Some(time),
            lines,
            transfers,
        }
    }

    /// Whether a route was found.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of line changes.
    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    /// Time in minutes, for display.
    pub fn time_mins(&self) -> Option<f64> {
        self.time.map(|hours| hours * 60.0)
    }

    /// Fare for the route's distance.
    pub fn price(&self) -> Option<u32> {
        let distance = self.distance.and_then(|d| i64::try_from(d).ok());
        fare::calculate_price(distance)
    }
}

/// Line changes along a path whose segments run on `lines`.
///
/// Boarding the first line is not a transfer.
pub fn transfers_along(path: &[Station], lines: &[LineId]) -> Vec<Transfer> {
    lines
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .filter_map(|(i, pair)| {
            Some(Transfer {
                at: path.get(i + 1)?.clone(),
                from: pair[0].clone(),
                to: pair[1].clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    #[test]
    fn unreachable_has_no_numbers() {
        let result = PathResult::unreachable();
        assert!(!result.is_reachable());
        assert_eq!(result.distance, None);
        assert_eq!(result.time, None);
        assert_eq!(result.time_mins(), None);
        assert_eq!(result.price(), None);
        assert_eq!(result.transfer_count(), 0);
    }

    #[test]
    fn transfers_are_line_changes() {
        let path = vec![st("A"), st("B"), st("C"), st("D"), st("E")];
        let lines = vec![line("L1"), line("L2"), line("L2"), line("L3")];

        let transfers = transfers_along(&path, &lines);

        assert_eq!(
            transfers,
            vec![
                Transfer {
                    at: st("B"),
                    from: line("L1"),
                    to: line("L2"),
                },
                Transfer {
                    at: st("D"),
                    from: line("L2"),
                    to: line("L3"),
                },
            ]
        );
    }

    #[test]
    fn single_line_has_no_transfers() {
        let path = vec![st("A"), st("B"), st("C")];
        let lines = vec![line("L1"), line("L1")];
        assert!(transfers_along(&path, &lines).is_empty());
        assert!(transfers_along(&[st("A")], &[]).is_empty());
    }

    #[test]
    fn new_derives_transfers_and_price() {
        let result = PathResult::new(
            vec![st("A"), st("B"), st("C")],
            13_000,
            0.1625,
            vec![line("L1"), line("L2")],
        );

        assert!(result.is_reachable());
        assert_eq!(result.transfer_count(), 1);
        assert_eq!(result.price(), Some(5));
        assert_eq!(result.time_mins(), Some(0.1625 * 60.0));
    }

    #[test]
    fn serializes_for_presentation() {
        let result = PathResult::new(vec![st("A"), st("B")], 500, 0.5, vec![line("L1")]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["path"], serde_json::json!(["A", "B"]));
        assert_eq!(json["distance"], 500);
        assert_eq!(json["lines"], serde_json::json!(["L1"]));
        assert_eq!(json["transfers"], serde_json::json!([]));

        let json = serde_json::to_value(PathResult::unreachable()).unwrap();
        assert!(json["distance"].is_null());
        assert!(json["time"].is_null());
    }
}
