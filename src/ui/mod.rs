//! Terminal rendering using ratatui.
//!
//! Two co-dependent panels render from the same monitor state on every
//! frame: the current-value readout and the signal graph.

pub mod common;
pub mod graph;
pub mod readout;
pub mod theme;

pub use theme::Theme;
