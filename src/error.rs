//! Error types for configuration, row sources and exports
//!
//! Services return `AdminError`; the app layer wraps it in `anyhow` or turns
//! it into an error toast.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read rows from {path}: {source}")]
    RowIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row data in {path}: {message}")]
    RowFormat { path: PathBuf, message: String },

    #[error("row id {value:?} is not an integer")]
    InvalidRowId { value: String },

    #[error("failed to export to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
