use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the analyzer pipeline.
#[derive(Error, Debug)]
pub enum GsecError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's contents could not be parsed as an auction record.
    #[error("Failed to parse {path}: {source}")]
    RecordParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, GsecError>;
