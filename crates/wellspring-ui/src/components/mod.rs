//! Reusable dashboard components

mod button;
mod community_snapshot;

pub use button::*;
pub use community_snapshot::*;
