//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Station};
use crate::network::Network;
use crate::planner::{PathResult, SearchMode, Transfer};

/// Request to list stations.
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchRequest {
    /// Case-insensitive substring filter (optional)
    pub q: Option<String>,

    /// Maximum number of results (optional)
    pub limit: Option<usize>,
}

/// A station in listing results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name
    pub name: String,

    /// External station identifier, if the dataset had one
    pub id: Option<String>,
}

/// Response for station listing.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station or attraction name
    pub from: String,

    /// Destination station or attraction name
    pub to: String,

    /// Search mode: "distance", "time", "transfers" or "1".."3".
    /// Defaults to distance.
    pub mode: Option<String>,
}

/// A line change in a route response.
#[derive(Debug, Serialize)]
pub struct TransferResult {
    /// Station where the change happens
    pub at: String,

    /// Line arrived on
    pub from: String,

    /// Line departed on
    pub to: String,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Origin as resolved (or as given, if unknown)
    pub from: String,

    /// Destination as resolved (or as given, if unknown)
    pub to: String,

    /// Search mode used
    pub mode: SearchMode,

    /// Whether a route was found
    pub reachable: bool,

    /// Stations from origin to destination
    pub path: Vec<String>,

    /// Total length in metres
    pub distance: Option<u64>,

    /// Total time in hours, including transfer costs
    pub time_hours: Option<f64>,

    /// Total time in minutes
    pub time_mins: Option<f64>,

    /// Line of each segment along the path
    pub lines: Vec<String>,

    /// Line changes along the path
    pub transfers: Vec<TransferResult>,

    /// Number of line changes
    pub transfer_count: usize,

    /// Fare for the route distance
    pub price: Option<u32>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a network station.
    pub fn from_station(network: &Network, station: &Station) -> Self {
        Self {
            name: station.to_string(),
            id: network
                .station_id(station)
                .map(|id| id.as_str().to_string())
                .filter(|id| !id.is_empty()),
        }
    }
}

impl TransferResult {
    /// Create from a domain Transfer.
    pub fn from_transfer(transfer: &Transfer) -> Self {
        Self {
            at: transfer.at.to_string(),
            from: transfer.from.to_string(),
            to: transfer.to.to_string(),
        }
    }
}

impl RouteResponse {
    /// Create from a search result.
    pub fn from_result(from: String, to: String, mode: SearchMode, result: &PathResult) -> Self {
        Self {
            from,
            to,
            mode,
            reachable: result.is_reachable(),
            path: result.path.iter().map(Station::to_string).collect(),
            distance: result.distance,
            time_hours: result.time,
            time_mins: result.time_mins(),
            lines: result.lines.iter().map(LineId::to_string).collect(),
            transfers: result
                .transfers
                .iter()
                .map(TransferResult::from_transfer)
                .collect(),
            transfer_count: result.transfer_count(),
            price: result.price(),
        }
    }
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
    fn route_response_from_result() {
        let result = PathResult::new(
            vec![st("A"), st("B"), st("C")],
            13_000,
            0.5,
            vec![line("L1"), line("L2")],
        );
        let response =
            RouteResponse::from_result("A".into(), "C".into(), SearchMode::Distance, &result);

        assert!(response.reachable);
        assert_eq!(response.path, vec!["A", "B", "C"]);
        assert_eq!(response.lines, vec!["L1", "L2"]);
        assert_eq!(response.distance, Some(13_000));
        assert_eq!(response.time_mins, Some(30.0));
        assert_eq!(response.transfer_count, 1);
        assert_eq!(response.transfers[0].at, "B");
        assert_eq!(response.price, Some(5));
    }

    #[test]
    fn unreachable_response_serializes_nulls() {
        let response = RouteResponse::from_result(
            "A".into(),
            "Nowhere".into(),
            SearchMode::Time,
            &PathResult::unreachable(),
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["reachable"], false);
        assert_eq!(json["mode"], "time");
        assert!(json["distance"].is_null());
        assert!(json["price"].is_null());
        assert_eq!(json["path"], serde_json::json!([]));
    }
}
