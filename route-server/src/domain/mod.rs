//! Domain types for the route planner.
//!
//! Station names and line identifiers arrive as free text from the edge
//! dataset. The types here normalise and validate that text once, so the
//! network and the search strategies can compare and hash them cheaply.

mod error;
mod line;
mod station;

pub use error::DomainError;
pub use line::{InvalidLineId, LineId};
pub use station::{InvalidStation, Station, StationId};
