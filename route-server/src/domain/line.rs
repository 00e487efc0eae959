//! Line identifier type.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line identifier: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// Identifier of a service line, e.g. `"L2"` or `"Line 10"`.
///
/// Two consecutive segments with equal line identifiers ride the same line;
/// any other pair is a transfer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(Arc<str>);

impl LineId {
    /// Parse a line identifier. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }
        Ok(LineId(Arc::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.as_str())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
