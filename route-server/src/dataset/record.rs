//! Raw edge records.

use serde::{Deserialize, Serialize};

/// One row of the edge dataset, exactly as read.
///
/// All fields are kept as text. Turning them into stations, lines and a
/// length is the graph builder's job, so that a malformed row can be
/// reported with its position instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id1: String,
    pub id2: String,
    pub name1: String,
    pub name2: String,
    pub length: String,
    pub line: String,
}

impl EdgeRecord {
    pub fn new(
        id1: impl Into<String>,
        id2: impl Into<String>,
        name1: impl Into<String>,
        name2: impl Into<String>,
        length: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self {
            id1: id1.into(),
            id2: id2.into(),
            name1: name1.into(),
            name2: name2.into(),
            length: length.into(),
            line: line.into(),
        }
    }
}

/// A JSON scalar that may be either a string or a number.
///
/// Numbers are kept in their textual form so identifiers such as `0112`
/// written as strings and lengths written as numbers both survive.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum JsonScalar {
    Text(String),
    Number(serde_json::Number),
}

impl From<JsonScalar> for String {
    fn from(value: JsonScalar) -> Self {
        match value {
            JsonScalar::Text(s) => s,
            JsonScalar::Number(n) => n.to_string(),
        }
    }
}

/// Edge row as it appears in the JSON form of the dataset.
#[derive(Debug, Deserialize)]
pub(super) struct JsonEdgeRow {
    id1: JsonScalar,
    id2: JsonScalar,
    name1: JsonScalar,
    name2: JsonScalar,
    length: JsonScalar,
    line: JsonScalar,
}

impl From<JsonEdgeRow> for EdgeRecord {
    fn from(row: JsonEdgeRow) -> Self {
        EdgeRecord {
            id1: row.id1.into(),
            id2: row.id2.into(),
            name1: row.name1.into(),
            name2: row.name2.into(),
            length: row.length.into(),
            line: row.line.into(),
        }
    }
}
