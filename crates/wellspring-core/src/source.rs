//! Summary source - reading community summaries from JSON.
//!
//! The dashboard's data feed is a JSON document shaped like
//!
//! ```json
//! { "newSuccessStories": 5, "popularTip": "Drink water", "activeDiscussions": 7 }
//! ```
//!
//! A missing file is not an error: it means the feed has not produced anything
//! yet, and the card keeps showing its loading message.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SummaryError};
use crate::summary::CommunitySummary;

/// Parse a summary document.
///
/// `null` yields `None`; any object yields `Some`, with unusable field values
/// dropped rather than rejected.
pub fn parse_summary(json: &str) -> Result<Option<CommunitySummary>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => Ok(Some(serde_json::from_value(value)?)),
        other => Err(SummaryError::NotAnObject(json_kind(&other))),
    }
}

/// Load a summary file, blocking the current thread.
pub fn load_summary(path: impl AsRef<Path>) -> Result<Option<CommunitySummary>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_summary(&contents),
        Err(e) => not_found_as_none(path, e),
    }
}

/// Load a summary file without blocking the runtime.
pub async fn read_summary(path: impl AsRef<Path>) -> Result<Option<CommunitySummary>> {
    let path = path.as_ref();
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            let summary = parse_summary(&contents)?;
            tracing::debug!(path = %path.display(), present = summary.is_some(), "Summary read");
            Ok(summary)
        }
        Err(e) => not_found_as_none(path, e),
    }
}

fn not_found_as_none(path: &Path, e: std::io::Error) -> Result<Option<CommunitySummary>> {
    if e.kind() == ErrorKind::NotFound {
        tracing::debug!(path = %path.display(), "No summary file yet");
        Ok(None)
    } else {
        Err(SummaryError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
