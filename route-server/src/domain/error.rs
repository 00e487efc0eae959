//! Domain error types.
//!
//! These errors describe edge records whose text cannot become domain
//! values. They are distinct from dataset I/O errors.

use super::{InvalidLineId, InvalidStation};

/// Validation failures when turning raw record fields into domain values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A station name field was blank
    #[error("{field}: {source}")]
    Station {
        field: &'static str,
        source: InvalidStation,
    },

    /// The line field was blank
    #[error("line: {0}")]
    Line(#[from] InvalidLineId),
}
