//! Building a [`Network`] from edge records.

use tracing::{debug, warn};

use crate::dataset::EdgeRecord;
use crate::domain::{DomainError, LineId, Station, StationId};

use super::graph::{Network, Segment, StationPair};
use super::length::{LengthParseError, parse_length};

/// What to do when two records connect the same pair of stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateSegments {
    /// The later record replaces the earlier one.
    #[default]
    Replace,

    /// Keep every record as a parallel segment.
    Keep,
}

/// Configuration for network construction.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    pub duplicate_segments: DuplicateSegments,
}

impl BuildConfig {
    pub fn new(duplicate_segments: DuplicateSegments) -> Self {
        Self { duplicate_segments }
    }
}

/// A problem found in one edge record.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildIssue {
    /// Zero-based position of the record in the input.
    pub row: usize,
    pub kind: BuildIssueKind,
}

/// Kinds of build issue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildIssueKind {
    /// The length could not be parsed; the segment was not added.
    #[error("unusable length: {0}")]
    Length(#[from] LengthParseError),

    /// A name or line field was blank; the record was skipped.
    #[error("invalid field: {0}")]
    Field(#[from] DomainError),

    /// A segment on another line was overwritten.
    #[error("segment {from} - {to} on {previous} replaced by {line}")]
    Replaced {
        from: Station,
        to: Station,
        previous: LineId,
        line: LineId,
    },

    /// A parallel segment on another line was added.
    #[error("parallel segment {from} - {to} on {line} alongside {previous}")]
    Parallel {
        from: Station,
        to: Station,
        previous: LineId,
        line: LineId,
    },
}

/// A built network and the issues found while building it.
#[derive(Debug, Clone)]
pub struct BuiltNetwork {
    pub network: Network,
    pub issues: Vec<BuildIssue>,
}

/// Incremental network builder.
///
/// # Example
///
/// ```
/// use route_server::dataset::EdgeRecord;
/// use route_server::network::{BuildConfig, NetworkBuilder};
///
/// let records = vec![
///     EdgeRecord::new("1", "2", "A", "B", "5000", "L1"),
///     EdgeRecord::new("2", "3", "B", "C", "oops", "L2"),
/// ];
/// let built = NetworkBuilder::new(BuildConfig::default())
///     .add_records(&records)
///     .build();
///
/// assert_eq!(built.network.station_count(), 3);
/// assert_eq!(built.network.segment_count(), 1);
/// assert_eq!(built.issues.len(), 1);
/// ```
#[derive(Debug)]
pub struct NetworkBuilder {
    config: BuildConfig,
    network: Network,
    issues: Vec<BuildIssue>,
    rows: usize,
}

impl NetworkBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            network: Network::new(),
            issues: Vec::new(),
            rows: 0,
        }
    }

    /// Add every record in order.
    pub fn add_records<'r>(mut self, records: impl IntoIterator<Item = &'r EdgeRecord>) -> Self {
        for record in records {
            self.add_record(record);
        }
        self
    }

    /// Add one record.
    ///
    /// Both stations are registered even when the length is unusable, so
    /// they still show up as (possibly isolated) vertices.
    pub fn add_record(&mut self, record: &EdgeRecord) {
        let row = self.rows;
        self.rows += 1;

        let (from, to, line) = match parse_fields(record) {
            Ok(fields) => fields,
            Err(e) => {
                self.report(row, BuildIssueKind::Field(e));
                return;
            }
        };

        self.network
            .add_station(from.clone(), StationId::new(record.id1.as_str()));
        self.network
            .add_station(to.clone(), StationId::new(record.id2.as_str()));

        let length = match parse_length(&record.length) {
            Ok(length) => length,
            Err(e) => {
                self.report(row, BuildIssueKind::Length(e));
                return;
            }
        };

        let previous = self
            .network
            .index_line(StationPair::new(from.clone(), to.clone()), line.clone());
        if let Some(previous) = previous.filter(|p| *p != line) {
            let kind = match self.config.duplicate_segments {
                DuplicateSegments::Replace => BuildIssueKind::Replaced {
                    from: from.clone(),
                    to: to.clone(),
                    previous,
                    line: line.clone(),
                },
                DuplicateSegments::Keep => BuildIssueKind::Parallel {
                    from: from.clone(),
                    to: to.clone(),
                    previous,
                    line: line.clone(),
                },
            };
            self.report(row, kind);
        }

        let segment = Segment::new(length, line);
        self.insert(&from, &to, segment.clone());
        if from != to {
            self.insert(&to, &from, segment);
        }
    }

    fn insert(&mut self, from: &Station, to: &Station, segment: Segment) {
        let segments = self.network.segments_mut(from, to);
        match self.config.duplicate_segments {
            DuplicateSegments::Replace => {
                segments.clear();
                segments.push(segment);
            }
            DuplicateSegments::Keep => segments.push(segment),
        }
    }

    fn report(&mut self, row: usize, kind: BuildIssueKind) {
        warn!(row, issue = %kind, "Edge record issue");
        self.issues.push(BuildIssue { row, kind });
    }

    /// Finish building.
    pub fn build(self) -> BuiltNetwork {
        debug!(
            stations = self.network.station_count(),
            segments = self.network.segment_count(),
            issues = self.issues.len(),
            "Network built"
        );
        BuiltNetwork {
            network: self.network,
            issues: self.issues,
        }
    }
}

impl Network {
    /// Build a network from records in one go.
    pub fn from_records(records: &[EdgeRecord], config: BuildConfig) -> BuiltNetwork {
        NetworkBuilder::new(config).add_records(records).build()
    }
}

fn parse_fields(record: &EdgeRecord) -> Result<(Station, Station, LineId), DomainError> {
    let from = Station::parse(&record.name1).map_err(|source| DomainError::Station {
        field: "name1",
        source,
    })?;
    let to = Station::parse(&record.name2).map_err(|source| DomainError::Station {
        field: "name2",
        source,
    })?;
    let line = LineId::parse(&record.line)?;
    Ok((from, to, line))
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

    fn rec(a: &str, b: &str, len: &str, l: &str) -> EdgeRecord {
        EdgeRecord::new(format!("id-{a}"), format!("id-{b}"), a, b, len, l)
    }

    fn build(records: &[EdgeRecord], policy: DuplicateSegments) -> BuiltNetwork {
        Network::from_records(records, BuildConfig::new(policy))
    }

    #[test]
    fn segments_are_symmetric() {
        let built = build(
            &[rec("A", "B", "5000", "L1"), rec("B", "C", "8000", "L2")],
            DuplicateSegments::Replace,
        );
        let network = &built.network;

        assert!(built.issues.is_empty());
        assert_eq!(
            network.segments_between(&st("A"), &st("B")),
            &[Segment::new(5000, line("L1"))]
        );
        assert_eq!(
            network.segments_between(&st("B"), &st("A")),
            &[Segment::new(5000, line("L1"))]
        );
        assert_eq!(
            network.segments_between(&st("C"), &st("B")),
            &[Segment::new(8000, line("L2"))]
        );
    }

    #[test]
    fn station_ids_are_recorded() {
        let built = build(&[rec("A", "B", "5000", "L1")], DuplicateSegments::Replace);
        assert_eq!(
            built.network.station_id(&st("B")).map(StationId::as_str),
            Some("id-B")
        );
    }

    #[test]
    fn later_station_id_wins() {
        let records = [
            EdgeRecord::new("1", "2", "A", "B", "10", "L1"),
            EdgeRecord::new("9", "3", "A", "C", "10", "L1"),
        ];
        let built = build(&records, DuplicateSegments::Replace);
        assert_eq!(
            built.network.station_id(&st("A")).map(StationId::as_str),
            Some("9")
        );
    }

    #[test]
    fn malformed_length_keeps_stations_but_not_segment() {
        let built = build(
            &[rec("A", "B", "5000", "L1"), rec("B", "C", "abc", "L2")],
            DuplicateSegments::Replace,
        );

        assert!(built.network.contains(&st("C")));
        assert!(built.network.segments_between(&st("B"), &st("C")).is_empty());
        assert_eq!(
            built.issues,
            vec![BuildIssue {
                row: 1,
                kind: BuildIssueKind::Length(LengthParseError::NoDigits("abc".to_string())),
            }]
        );
    }

    #[test]
    fn blank_name_skips_record() {
        let built = build(
            &[rec("A", " ", "10", "L1"), rec("A", "B", "10", "L1")],
            DuplicateSegments::Replace,
        );

        assert_eq!(built.network.station_count(), 2);
        assert_eq!(built.issues.len(), 1);
        assert_eq!(built.issues[0].row, 0);
        assert!(matches!(built.issues[0].kind, BuildIssueKind::Field(_)));
    }

    #[test]
    fn replace_policy_is_last_write_wins() {
        let built = build(
            &[rec("A", "B", "5000", "L1"), rec("B", "A", "4000", "L2")],
            DuplicateSegments::Replace,
        );
        let network = &built.network;

        assert_eq!(
            network.segments_between(&st("A"), &st("B")),
            &[Segment::new(4000, line("L2"))]
        );
        assert_eq!(network.segment_count(), 1);
        assert!(matches!(
            built.issues.as_slice(),
            [BuildIssue {
                row: 1,
                kind: BuildIssueKind::Replaced { .. }
            }]
        ));
    }

    #[test]
    fn keep_policy_stores_parallel_segments() {
        let built = build(
            &[rec("A", "B", "5000", "L1"), rec("A", "B", "4000", "L2")],
            DuplicateSegments::Keep,
        );
        let network = &built.network;

        assert_eq!(
            network.segments_between(&st("B"), &st("A")),
            &[Segment::new(5000, line("L1")), Segment::new(4000, line("L2"))]
        );
        assert_eq!(network.segment_count(), 2);
        assert!(matches!(
            built.issues[0].kind,
            BuildIssueKind::Parallel { .. }
        ));
    }

    #[test]
    fn duplicate_on_same_line_is_not_an_issue() {
        let built = build(
            &[rec("A", "B", "5000", "L1"), rec("A", "B", "5100", "L1")],
            DuplicateSegments::Replace,
        );
        assert!(built.issues.is_empty());
        assert_eq!(
            built.network.segments_between(&st("A"), &st("B")),
            &[Segment::new(5100, line("L1"))]
        );
    }

    #[test]
    fn self_loop_is_stored_once() {
        let built = build(&[rec("A", "A", "0", "L1")], DuplicateSegments::Keep);
        assert_eq!(built.network.segments_between(&st("A"), &st("A")).len(), 1);
        assert_eq!(built.network.segment_count(), 1);
    }
}
