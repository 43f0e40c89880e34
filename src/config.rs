//! Monitor construction parameters.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::data::ThresholdSpec;

pub const DEFAULT_TITLE: &str = "Signal Operation Monitor";
pub const DEFAULT_WINDOW_SIZE: usize = 5;
pub const DEFAULT_Y_MIN: f64 = 0.0;
pub const DEFAULT_Y_MAX: f64 = 100.0;
pub const DEFAULT_TICK_PAD: Duration = Duration::from_secs(1);

/// Full construction configuration for a [`crate::Monitor`].
///
/// Deserializable so a complete monitor setup can be loaded from JSON;
/// every field falls back to its default when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Display title.
    pub title: String,
    /// Unit label for the value axis (e.g. "%", "V", "rpm").
    pub y_unit: String,
    /// Label for the time axis.
    pub x_unit: String,
    /// Maximum number of most-recent samples shown on the graph.
    pub window_size: usize,
    /// Lower bound of the y display range.
    pub y_min: f64,
    /// Upper bound of the y display range.
    pub y_max: f64,
    /// Padding before the earliest shown timestamp on the x axis.
    pub x_pre_tick: Duration,
    /// Padding after the latest shown timestamp on the x axis.
    pub x_post_tick: Duration,
    /// Operation range configuration.
    pub thresholds: ThresholdSpec,
    /// Optional pre-seeded data.
    pub seed: Option<SeedData>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            y_unit: "%".to_string(),
            x_unit: "utc".to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
            x_pre_tick: DEFAULT_TICK_PAD,
            x_post_tick: DEFAULT_TICK_PAD,
            thresholds: ThresholdSpec::default(),
            seed: None,
        }
    }
}

/// Paired timestamp/value sequences for pre-seeding or replaying.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    pub timestamps: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading seed data from {}", path.display()))?;
        let seed: SeedData = serde_json::from_str(&content)
            .with_context(|| format!("parsing seed data from {}", path.display()))?;
        Ok(seed)
    }
}
