//! Wellspring Core Library
//!
//! Data model and plumbing behind the community dashboard.
//!
//! ## Overview
//!
//! The dashboard shows a "community snapshot": how many new success stories
//! were shared, the tip people are talking about, and how many discussions are
//! active. This crate owns that summary and everything around it:
//!
//! - **summary**: the [`CommunitySummary`] value and its display rules
//! - **source**: lenient JSON parsing and file loading (blocking and async)
//! - **logging**: one-shot `tracing` subscriber setup
//!
//! Rendering lives in `wellspring-ui`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wellspring_core::source::read_summary;
//!
//! #[tokio::main]
//! async fn main() -> wellspring_core::Result<()> {
//!     match read_summary("community.json").await? {
//!         Some(summary) if !summary.is_empty() => println!("{summary:?}"),
//!         _ => println!("still gathering community data"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod source;
pub mod summary;

// Re-exports
pub use error::{Result, SummaryError};
pub use source::{load_summary, parse_summary, read_summary};
pub use summary::{Count, CommunitySummary};
