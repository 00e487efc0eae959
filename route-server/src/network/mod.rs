//! Transit network construction.
//!
//! The network is an undirected multigraph keyed by station name. Every
//! segment is stored in both directions with the same length and line.
//! [`NetworkBuilder`] turns raw edge records into a [`Network`], reporting
//! rows it could not use as [`BuildIssue`]s instead of failing.

mod builder;
mod graph;
mod length;

pub use builder::{BuildConfig, BuildIssue, BuildIssueKind, BuiltNetwork, DuplicateSegments, NetworkBuilder};
pub use graph::{Network, Segment, StationPair};
pub use length::{LengthParseError, MAX_SEGMENT_LENGTH, parse_length};
