//! Station name and identifier types.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A station name, the vertex key of the transit network.
///
/// Names are trimmed of surrounding whitespace and must not be empty.
/// The text is reference-counted because search states clone whole paths
/// of stations.
///
/// # Examples
///
/// ```
/// use route_server::domain::Station;
///
/// let s = Station::parse("  People's Square ").unwrap();
/// assert_eq!(s.as_str(), "People's Square");
///
/// assert!(Station::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Parse a station name.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStation {
                reason: "must not be empty",
            });
        }
        Ok(Station(Arc::from(trimmed)))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// External station identifier.
///
/// Only used by renderers to place a station on a map, so it is carried
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        StationId(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Surrounding whitespace never changes the parsed name
        #[test]
        fn whitespace_insensitive(name in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]", pad in "[ \t]{0,4}") {
            let padded = format!("{pad}{name}{pad}");
            prop_assert_eq!(Station::parse(&padded).unwrap(), Station::parse(&name).unwrap());
        }
    }
}
