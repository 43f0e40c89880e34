//! Data models for the signal monitor.
//!
//! ## Submodules
//!
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "1s", "500ms")
//! - [`series`]: Append-only sample storage ([`Sample`], [`SeriesBuffer`])
//! - [`thresholds`]: Operation range bands and classification of the latest value
//!
//! ## Data Flow
//!
//! ```text
//! (timestamp, value)
//!        │
//!        ▼
//! SeriesBuffer::push()
//!        │
//!        ├──▶ Bands::classify(latest)  (severity for styling)
//!        │
//!        └──▶ SeriesBuffer::window(n)  (samples shown on the graph)
//! ```

pub mod duration;
pub mod series;
pub mod thresholds;

pub use series::{Sample, SeriesBuffer};
pub use thresholds::{Bands, BoundSpec, Classification, ThresholdSpec};
