//! Dataset error types.

use std::path::PathBuf;

/// Errors that can occur when loading a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Reading the file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A CSV row could not be decoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON document could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither `.csv` nor `.json`
    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(PathBuf),
}
