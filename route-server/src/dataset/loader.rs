//! Reading edge and attraction tables from CSV or JSON.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::attractions::{AttractionIndex, AttractionRecord};
use super::error::DatasetError;
use super::record::{EdgeRecord, JsonEdgeRow};

/// On-disk format of a dataset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    /// Guess the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(DatasetFormat::Csv),
            "json" => Some(DatasetFormat::Json),
            _ => None,
        }
    }
}

/// Decode every row of a CSV table.
///
/// With `has_headers` the columns are matched by name and extra columns are
/// ignored; without it they are taken by position. Fields are trimmed.
pub fn read_csv<T, R>(reader: R, has_headers: bool) -> Result<Vec<T>, DatasetError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Decode a JSON array of objects.
pub fn read_json<T, R>(reader: R) -> Result<Vec<T>, DatasetError>
where
    T: DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Decode the JSON form of the edge table, accepting numbers or strings
/// for every field.
pub fn read_edges_json<R: Read>(reader: R) -> Result<Vec<EdgeRecord>, DatasetError> {
    let rows: Vec<JsonEdgeRow> = read_json(reader)?;
    Ok(rows.into_iter().map(EdgeRecord::from).collect())
}

fn open(path: &Path) -> Result<BufReader<File>, DatasetError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn format_of(path: &Path) -> Result<DatasetFormat, DatasetError> {
    DatasetFormat::from_path(path).ok_or_else(|| DatasetError::UnsupportedFormat(path.to_path_buf()))
}

/// Load the edge table from a `.csv` (with header row) or `.json` file.
pub fn load_edges(path: &Path) -> Result<Vec<EdgeRecord>, DatasetError> {
    let format = format_of(path)?;
    let reader = open(path)?;
    let records = match format {
        DatasetFormat::Csv => read_csv(reader, true)?,
        DatasetFormat::Json => read_edges_json(reader)?,
    };
    debug!(path = %path.display(), records = records.len(), "Loaded edge table");
    Ok(records)
}

/// Load the attraction alias table from a `.csv` (with header row) or
/// `.json` file.
pub fn load_attractions(path: &Path) -> Result<AttractionIndex, DatasetError> {
    let format = format_of(path)?;
    let reader = open(path)?;
    let records: Vec<AttractionRecord> = match format {
        DatasetFormat::Csv => read_csv(reader, true)?,
        DatasetFormat::Json => read_json(reader)?,
    };
    debug!(path = %path.display(), records = records.len(), "Loaded attraction table");
    Ok(records.into_iter().collect())
}
