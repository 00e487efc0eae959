//! Attraction to station aliases.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of the attraction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttractionRecord {
    pub attraction: String,
    pub station: String,
}

/// Lookup from attraction name to the name of the station serving it.
///
/// Later rows win when an attraction is listed twice.
#[derive(Debug, Clone, Default)]
pub struct AttractionIndex {
    stations: HashMap<String, String>,
}

impl AttractionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias. Blank names are ignored.
    pub fn add(&mut self, attraction: &str, station: &str) {
        let (attraction, station) = (attraction.trim(), station.trim());
        if attraction.is_empty() || station.is_empty() {
            return;
        }
        self.stations
            .insert(attraction.to_string(), station.to_string());
    }

    /// Station name for an attraction, if known.
    pub fn station_for(&self, attraction: &str) -> Option<&str> {
        self.stations.get(attraction.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl FromIterator<AttractionRecord> for AttractionIndex {
    fn from_iter<I: IntoIterator<Item = AttractionRecord>>(iter: I) -> Self {
        let mut index = AttractionIndex::new();
        for record in iter {
            index.add(&record.attraction, &record.station);
        }
        index
    }
}
