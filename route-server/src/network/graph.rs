//! The transit network graph.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::dataset::AttractionIndex;
use crate::domain::{LineId, Station, StationId};

/// One physical segment between two adjacent stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Length in metres.
    pub length: u64,

    /// Line the segment belongs to.
    pub line: LineId,
}

impl Segment {
    pub fn new(length: u64, line: LineId) -> Self {
        Self { length, line }
    }
}

/// Ordered pair of stations, used as a composite map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationPair {
    pub from: Station,
    pub to: Station,
}

impl StationPair {
    pub fn new(from: Station, to: Station) -> Self {
        Self { from, to }
    }

    /// The same pair travelled the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Undirected transit multigraph.
///
/// Adjacency is kept in ordered maps so that iteration over stations and
/// neighbours is deterministic, which in turn makes every search
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Network {
    adjacency: BTreeMap<Station, BTreeMap<Station, Vec<Segment>>>,
    station_ids: HashMap<Station, StationId>,
    line_index: HashMap<StationPair, LineId>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with its external identifier.
    ///
    /// A later identifier for the same name replaces the earlier one.
    pub(super) fn add_station(&mut self, station: Station, id: StationId) {
        self.adjacency.entry(station.clone()).or_default();
        self.station_ids.insert(station, id);
    }

    /// Segments currently stored from `from` to `to`, mutable.
    pub(super) fn segments_mut(&mut self, from: &Station, to: &Station) -> &mut Vec<Segment> {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .entry(to.clone())
            .or_default()
    }

    /// Record the line of the latest segment between two stations, both ways.
    ///
    /// Returns the line previously recorded for the pair, if any.
    pub(super) fn index_line(&mut self, pair: StationPair, line: LineId) -> Option<LineId> {
        self.line_index.insert(pair.reversed(), line.clone());
        self.line_index.insert(pair, line)
    }

    /// All station names in lexicographic order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.adjacency.keys()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected segments.
    ///
    /// Self-loops are stored once and count once.
    pub fn segment_count(&self) -> usize {
        let (loops, directed) = self
            .adjacency
            .iter()
            .flat_map(|(station, neighbours)| {
                neighbours
                    .iter()
                    .map(move |(neighbour, segments)| (station == neighbour, segments.len()))
            })
            .fold((0, 0), |(loops, directed), (is_loop, n)| {
                if is_loop {
                    (loops + n, directed)
                } else {
                    (loops, directed + n)
                }
            });
        loops + directed / 2
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether the station is part of the network.
    pub fn contains(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Look up a station by exact name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        let key = Station::parse(name).ok()?;
        self.adjacency.get_key_value(&key).map(|(station, _)| station)
    }

    /// Resolve user input to a station: an exact station name first, then
    /// an attraction alias.
    pub fn resolve(&self, input: &str, attractions: &AttractionIndex) -> Option<Station> {
        if let Some(station) = self.station(input) {
            return Some(station.clone());
        }
        let alias = attractions.station_for(input)?;
        self.station(alias).cloned()
    }

    /// External identifier of a station, for renderers.
    pub fn station_id(&self, station: &Station) -> Option<&StationId> {
        self.station_ids.get(station)
    }

    /// Every segment leaving `station`, with the neighbour it leads to.
    ///
    /// Neighbours come in name order; parallel segments to the same
    /// neighbour come in insertion order.
    pub fn neighbours<'a>(
        &'a self,
        station: &Station,
    ) -> impl Iterator<Item = (&'a Station, &'a Segment)> + 'a {
        self.adjacency
            .get(station)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter())
            .flat_map(|(neighbour, segments)| segments.iter().map(move |s| (neighbour, s)))
    }

    /// Segments directly connecting `from` and `to`.
    pub fn segments_between(&self, from: &Station, to: &Station) -> &[Segment] {
        self.adjacency
            .get(from)
            .and_then(|neighbours| neighbours.get(to))
            .map(Vec::as_slice)
            .unwrap_or(&[])
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

    fn sample() -> Network {
        let mut network = Network::new();
        network.add_station(st("B"), StationId::new("2"));
        network.add_station(st("A"), StationId::new("1"));
        network.add_station(st("C"), StationId::new("3"));
        for (a, b, len, l) in [("A", "B", 5000, "L1"), ("B", "C", 8000, "L2")] {
            let seg = Segment::new(len, line(l));
            network.segments_mut(&st(a), &st(b)).push(seg.clone());
            network.segments_mut(&st(b), &st(a)).push(seg);
            network.index_line(StationPair::new(st(a), st(b)), line(l));
        }
        network
    }

    #[test]
    fn stations_are_sorted() {
        let network = sample();
        let names: Vec<&str> = network.stations().map(Station::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(network.station_count(), 3);
        assert_eq!(network.segment_count(), 2);
    }

    #[test]
    fn neighbours_in_name_order() {
        let network = sample();
        let from_b: Vec<(&str, u64)> = network
            .neighbours(&st("B"))
            .map(|(n, s)| (n.as_str(), s.length))
            .collect();
        assert_eq!(from_b, vec![("A", 5000), ("C", 8000)]);
    }

    #[test]
    fn neighbours_of_unknown_station_is_empty() {
        let network = sample();
        assert_eq!(network.neighbours(&st("Z")).count(), 0);
    }

    #[test]
    fn segments_between_and_line_index() {
        let network = sample();
        assert_eq!(network.segments_between(&st("C"), &st("B")).len(), 1);
        assert!(network.segments_between(&st("A"), &st("C")).is_empty());
        assert_eq!(
            network.line_index.get(&StationPair::new(st("B"), st("A"))),
            Some(&line("L1"))
        );
        assert_eq!(
            network.line_index.get(&StationPair::new(st("A"), st("C"))),
            None
        );
    }

    #[test]
    fn station_lookup_and_ids() {
        let network = sample();
        assert_eq!(network.station(" A "), Some(&st("A")));
        assert_eq!(network.station("Z"), None);
        assert_eq!(network.station(""), None);
        assert_eq!(network.station_id(&st("C")).map(StationId::as_str), Some("3"));
    }

    #[test]
    fn resolve_prefers_station_then_alias() {
        let network = sample();
        let mut attractions = AttractionIndex::new();
        attractions.add("Museum", "C");
        attractions.add("A", "B");
        attractions.add("Ghost Town", "Nowhere");

        assert_eq!(network.resolve("A", &attractions), Some(st("A")));
        assert_eq!(network.resolve("Museum", &attractions), Some(st("C")));
        assert_eq!(network.resolve("Ghost Town", &attractions), None);
        assert_eq!(network.resolve("Unknown", &attractions), None);
    }
}
