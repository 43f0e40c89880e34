//! Sample source abstraction for feeding the monitor.
//!
//! This module provides a trait-based abstraction for receiving samples
//! from different backends - replayed recordings, stdin lines, or a
//! synthetic wave for demos.

mod replay;
mod stdin;
mod wave;

pub use replay::ReplaySource;
pub use stdin::StdinSource;
pub use wave::WaveSource;

use std::fmt::Debug;

use crate::data::Sample;

/// Trait for receiving samples from various backends.
///
/// # Example
///
/// ```
/// use opscope::{SampleSource, WaveSource};
///
/// let mut source = WaveSource::new(0.0, 100.0, std::time::Duration::ZERO);
/// if let Some(sample) = source.poll() {
///     println!("got {} at {}", sample.value, sample.timestamp);
/// }
/// ```
pub trait SampleSource: Send + Debug {
    /// Poll for the next sample.
    ///
    /// Returns `Some(sample)` if one is available, `None` otherwise.
    /// This method must be non-blocking.
    fn poll(&mut self) -> Option<Sample>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if an error occurred during the last poll.
    fn error(&self) -> Option<&str>;
}
