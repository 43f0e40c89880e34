//! # opscope
//!
//! A library and TUI for monitoring a live numeric signal against
//! configurable operation limit and tolerance bands.
//!
//! The monitor owns an append-only buffer of (timestamp, value) samples.
//! On each update the caller explicitly re-renders two co-dependent
//! views: a current-value readout styled by which band the latest sample
//! falls into, and a bounded-window graph of the most recent samples
//! overlaid with threshold reference lines.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Application                           │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │  app    │───▶│ monitor  │───▶│   ui    │───▶│ Terminal │ │
//! │  │ (state) │    │ (buffer +│    │(readout │    │          │ │
//! │  └────┬────┘    │  bands)  │    │ + graph)│    └──────────┘ │
//! │       │         └──────────┘    └─────────┘                 │
//! │       ▼                                                      │
//! │  ┌─────────┐                                                 │
//! │  │ source  │◀── ReplaySource | StdinSource | WaveSource     │
//! │  │ (input) │                                                 │
//! │  └─────────┘                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`monitor`]**: The state object - sample buffer, resolved bands,
//!   classification and windowing accessors
//! - **[`data`]**: Sample storage, threshold derivation, classification
//! - **[`source`]**: Sample source abstraction ([`SampleSource`] trait) with
//!   replay, stdin, and synthetic-wave implementations
//! - **[`ui`]**: Terminal rendering using ratatui - readout panel, signal
//!   graph, and theme support
//!
//! ## Usage
//!
//! ### As a library
//!
//! ```
//! use opscope::{Monitor, MonitorConfig};
//! use opscope::data::{BoundSpec, Classification, ThresholdSpec};
//!
//! let config = MonitorConfig {
//!     thresholds: ThresholdSpec {
//!         enabled: true,
//!         limit_min: Some(0.0),
//!         limit_max: Some(100.0),
//!         tolerance_max: Some(BoundSpec::Percent(10.0)),
//!         ..ThresholdSpec::default()
//!     },
//!     ..MonitorConfig::default()
//! };
//!
//! let mut monitor = Monitor::new(config);
//! monitor.update(chrono::Utc::now(), 92.0);
//! assert_eq!(monitor.classify_latest(), Some(Classification::Tolerance));
//! ```
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Demo wave with a 0..100 operation range
//! opscope --thresholds --limit-min 0 --limit-max 100 --tol-max 10%
//!
//! # Feed values from another process
//! sensor-dump | opscope --stdin --y-unit V
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod monitor;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::{MonitorConfig, SeedData};
pub use data::{Bands, BoundSpec, Classification, Sample, SeriesBuffer, ThresholdSpec};
pub use monitor::{Monitor, Readout};
pub use source::{ReplaySource, SampleSource, StdinSource, WaveSource};
pub use ui::Theme;
