//! Route search modes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Which quantity a route search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Shortest total length.
    Distance,
    /// Shortest travel time, transfers free.
    Time,
    /// Fewest line changes.
    Transfers,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Distance, SearchMode::Time, SearchMode::Transfers];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Distance => "distance",
            SearchMode::Time => "time",
            SearchMode::Transfers => "transfers",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognised search mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search mode {0:?} (expected 1, 2, 3, distance, time or transfers)")]
pub struct UnknownSearchMode(pub String);

impl FromStr for SearchMode {
    type Err = UnknownSearchMode;

    /// Accepts the numeric selectors `1`, `2`, `3` as well as the mode
    /// names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "distance" => Ok(SearchMode::Distance),
            "2" | "time" => Ok(SearchMode::Time),
            "3" | "transfers" => Ok(SearchMode::Transfers),
            _ => Err(UnknownSearchMode(s.to_string())),
        }
    }
}
