//! Wellspring UI Components
//!
//! Dioxus components for the community dashboard.
//!
//! ## Design Notes
//!
//! Components here are presentational: they take plain values and
//! `EventHandler`s as props and never fetch, cache, or route on their own.
//! The host application decides where data comes from and what a click means.
//!
//! Class names match the stylesheet shipped by the desktop app
//! (`community-snapshot`, `snapshot-line`, `btn-primary`, ...).

pub mod components;

pub use components::*;
