//! Visual theme for Wellspring.

mod styles;

pub use styles::GLOBAL_STYLES;
