//! The monitor state object.
//!
//! Owns the sample buffer and the resolved threshold bands. There is no
//! implicit reactivity: callers append with [`Monitor::update`] and then
//! explicitly render from the accessors ([`Monitor::readout`],
//! [`Monitor::window`], [`Monitor::x_bounds`]).

use chrono::{DateTime, Local, TimeDelta, Utc};

use crate::config::MonitorConfig;
use crate::data::{Bands, Classification, Sample, SeriesBuffer};

/// Formatted state of the latest sample, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// Raw latest value.
    pub value: f64,
    /// Value with unit, e.g. "42.123 %".
    pub text: String,
    /// Latest timestamp in UTC, e.g. "2026-08-30 12:00:00".
    pub utc: String,
    /// Latest timestamp shifted to the process's local offset.
    pub local: String,
    pub classification: Classification,
}

/// Live signal monitor: an append-only buffer of (timestamp, value)
/// samples classified against operation limit/tolerance bands.
///
/// # Example
///
/// ```
/// use opscope::{Monitor, MonitorConfig};
///
/// let mut monitor = Monitor::new(MonitorConfig::default());
/// monitor.update(chrono::Utc::now(), 42.0);
/// assert_eq!(monitor.window().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Monitor {
    config: MonitorConfig,
    bands: Bands,
    buffer: SeriesBuffer,
    x_pre_tick: TimeDelta,
    x_post_tick: TimeDelta,
}

impl Monitor {
    /// Create a monitor from a configuration.
    ///
    /// Threshold bands are resolved once here and stay immutable.
    /// Insufficient threshold input yields disabled bands, never an
    /// error. A zero window size is clamped to 1.
    pub fn new(mut config: MonitorConfig) -> Self {
        config.window_size = config.window_size.max(1);
        let bands = Bands::derive(&config.thresholds, config.y_min, config.y_max);

        let buffer = match config.seed.take() {
            Some(seed) => SeriesBuffer::from_paired(&seed.timestamps, &seed.values),
            None => SeriesBuffer::new(),
        };

        let x_pre_tick = TimeDelta::from_std(config.x_pre_tick).unwrap_or_else(|_| TimeDelta::zero());
        let x_post_tick =
            TimeDelta::from_std(config.x_post_tick).unwrap_or_else(|_| TimeDelta::zero());

        Self {
            config,
            bands,
            buffer,
            x_pre_tick,
            x_post_tick,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn bands(&self) -> &Bands {
        &self.bands
    }

    /// Append one sample. Rendering is the caller's next explicit step.
    pub fn update(&mut self, timestamp: DateTime<Utc>, value: f64) {
        self.buffer.push(timestamp, value);
    }

    /// Discard all samples, keeping configuration and bands.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.buffer.latest()
    }

    /// The samples currently visible on the graph: the last
    /// `min(len, window_size)`, oldest first.
    pub fn window(&self) -> &[Sample] {
        self.buffer.window(self.config.window_size)
    }

    /// Severity of the latest sample, or `None` on an empty buffer.
    pub fn classify_latest(&self) -> Option<Classification> {
        self.buffer.latest().map(|s| self.bands.classify(s.value))
    }

    /// Formatted latest-value state, or `None` on an empty buffer.
    pub fn readout(&self) -> Option<Readout> {
        let latest = self.buffer.latest()?;
        let local = latest.timestamp.with_timezone(&Local);
        Some(Readout {
            value: latest.value,
            text: format!("{:.3} {}", latest.value, self.config.y_unit),
            utc: latest.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            local: local.format("%Y-%m-%d %H:%M:%S").to_string(),
            classification: self.bands.classify(latest.value),
        })
    }

    /// X-axis display range: earliest shown timestamp minus the pre-tick
    /// pad through latest shown timestamp plus the post-tick pad.
    /// `None` on an empty buffer.
    pub fn x_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let window = self.window();
        let first = window.first()?;
        let last = window.last()?;
        Some((
            first.timestamp - self.x_pre_tick,
            last.timestamp + self.x_post_tick,
        ))
    }
}
