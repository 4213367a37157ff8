//! Error types for Wellspring

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining a community summary
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Reading the summary file failed for a reason other than absence
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Valid JSON, but neither an object nor null
    #[error("Summary must be a JSON object or null, got {0}")]
    NotAnObject(&'static str),
}

/// Result type alias for Wellspring operations
pub type Result<T> = std::result::Result<T, SummaryError>;
