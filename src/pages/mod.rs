//! Page components for Wellspring.

mod community;
mod dashboard;

pub use community::Community;
pub use dashboard::Dashboard;
