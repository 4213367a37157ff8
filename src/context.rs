//! Shared state for Wellspring pages.
//!
//! The latest community summary lives in a context signal provided by
//! `App`; pages read it with [`use_summary`].
//!
//! ## Usage
//!
//! ```ignore
//! let summary = use_summary();
//!
//! rsx! {
//!     CommunitySnapshotCard { summary: summary(), on_navigate: ... }
//! }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;
use wellspring_core::CommunitySummary;

/// Runtime configuration resolved from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Where the community summary is read from
    pub summary_path: PathBuf,
    /// How often to re-read it; `None` reads once at startup
    pub refresh: Option<Duration>,
}

impl AppConfig {
    pub fn new(summary_path: PathBuf, refresh: Option<Duration>) -> Self {
        Self {
            summary_path,
            refresh,
        }
    }
}

/// Get the application configuration.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Hook to access the latest community summary.
///
/// `None` until the first successful read.
pub fn use_summary() -> Signal<Option<CommunitySummary>> {
    use_context::<Signal<Option<CommunitySummary>>>()
}
