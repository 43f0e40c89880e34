//! Replay recorded samples from a seed-data file.
//!
//! Emits one recorded sample per interval, keeping the recorded
//! timestamps. Doubles as the loader for pre-seeded data files.

use std::collections::VecDeque;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use super::SampleSource;
use crate::config::SeedData;
use crate::data::Sample;

/// A source that replays a recorded timestamp/value sequence.
#[derive(Debug)]
pub struct ReplaySource {
    queue: VecDeque<Sample>,
    interval: Duration,
    last_emit: Option<Instant>,
    description: String,
}

impl ReplaySource {
    /// Create a replay source from samples already in memory.
    pub fn new(samples: Vec<Sample>, interval: Duration, description: &str) -> Self {
        Self {
            queue: samples.into(),
            interval,
            last_emit: None,
            description: format!("replay: {}", description),
        }
    }

    /// Load a seed-data JSON file and replay its samples.
    pub fn from_file<P: AsRef<Path>>(path: P, interval: Duration) -> Result<Self> {
        let path = path.as_ref();
        let seed = SeedData::load(path)?;
        let samples = seed
            .timestamps
            .iter()
            .zip(seed.values.iter())
            .map(|(&timestamp, &value)| Sample { timestamp, value })
            .collect();
        Ok(Self::new(
            samples,
            interval,
            &path.display().to_string(),
        ))
    }

    /// Number of samples still queued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl SampleSource for ReplaySource {
    fn poll(&mut self) -> Option<Sample> {
        let due = match self.last_emit {
            None => true,
            Some(at) => at.elapsed() >= self.interval,
        };
        if !due {
            return None;
        }

        let sample = self.queue.pop_front()?;
        self.last_emit = Some(Instant::now());
        Some(sample)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        if self.queue.is_empty() && self.last_emit.is_some() {
            Some("replay exhausted")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    fn sample(secs: i64, value: f64) -> Sample {
        Sample::new(Utc.timestamp_opt(secs, 0).unwrap(), value)
    }

    #[test]
    fn test_replays_in_order() {
        let samples = vec![sample(0, 1.0), sample(1, 2.0)];
        let mut source = ReplaySource::new(samples, Duration::ZERO, "test");

        assert_eq!(source.poll().unwrap().value, 1.0);
        assert_eq!(source.poll().unwrap().value, 2.0);
        assert!(source.poll().is_none());
        assert_eq!(source.error(), Some("replay exhausted"));
    }

    #[test]
    fn test_interval_gates_emission() {
        let samples = vec![sample(0, 1.0), sample(1, 2.0)];
        let mut source = ReplaySource::new(samples, Duration::from_secs(60), "test");

        // First sample is immediate, second is held back by the interval
        assert!(source.poll().is_some());
        assert!(source.poll().is_none());
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"timestamps": ["2026-08-30T12:00:00Z"], "values": [55.5]}}"#
        )
        .unwrap();

        let mut source = ReplaySource::from_file(file.path(), Duration::ZERO).unwrap();
        let sample = source.poll().unwrap();
        assert_eq!(sample.value, 55.5);
        assert!(source.description().starts_with("replay: "));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(ReplaySource::from_file("/nonexistent/data.json", Duration::ZERO).is_err());
    }
}
