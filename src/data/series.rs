//! Append-only sample storage.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single (timestamp, value) observation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered, append-only buffer of samples.
///
/// Samples are kept in arrival order and never mutated or removed after
/// being pushed. The buffer grows without bound; windowing happens at
/// read time via [`SeriesBuffer::window`].
#[derive(Debug, Clone, Default)]
pub struct SeriesBuffer {
    samples: Vec<Sample>,
}

impl SeriesBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from paired timestamp/value sequences.
    ///
    /// Mismatched lengths truncate to the shorter sequence.
    pub fn from_paired(timestamps: &[DateTime<Utc>], values: &[f64]) -> Self {
        let samples = timestamps
            .iter()
            .zip(values.iter())
            .map(|(&timestamp, &value)| Sample { timestamp, value })
            .collect();
        Self { samples }
    }

    /// Append a sample to the end of the buffer.
    pub fn push(&mut self, timestamp: DateTime<Utc>, value: f64) {
        self.samples.push(Sample { timestamp, value });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently appended sample, if any.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// The last `min(len, n)` samples, oldest first.
    pub fn window(&self, n: usize) -> &[Sample] {
        let start = self.samples.len().saturating_sub(n);
        &self.samples[start..]
    }

    /// Read-only view of the full buffer.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Discard all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_push_is_append_only() {
        let mut buffer = SeriesBuffer::new();
        buffer.push(ts(0), 1.0);
        buffer.push(ts(1), 2.0);
        let before: Vec<Sample> = buffer.samples().to_vec();

        buffer.push(ts(2), 3.0);

        assert_eq!(buffer.len(), 3);
        assert_eq!(&buffer.samples()[..2], before.as_slice());
        assert_eq!(buffer.latest().unwrap().value, 3.0);
    }

    #[test]
    fn test_window_never_exceeds_requested_size() {
        let mut buffer = SeriesBuffer::new();
        for i in 0..10 {
            buffer.push(ts(i), i as f64);
        }

        let window = buffer.window(5);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].value, 5.0);
        assert_eq!(window[4].value, 9.0);
    }

    #[test]
    fn test_window_shorter_than_buffer_returns_everything() {
        let mut buffer = SeriesBuffer::new();
        buffer.push(ts(0), 1.0);
        buffer.push(ts(1), 2.0);

        assert_eq!(buffer.window(5).len(), 2);
        assert_eq!(buffer.window(0).len(), 0);
    }

    #[test]
    fn test_from_paired_truncates_to_shorter() {
        let timestamps = vec![ts(0), ts(1), ts(2)];
        let values = vec![1.0, 2.0];

        let buffer = SeriesBuffer::from_paired(&timestamps, &values);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.latest().unwrap().value, 2.0);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = SeriesBuffer::new();
        assert!(buffer.is_empty());
        assert!(buffer.latest().is_none());
        assert!(buffer.window(5).is_empty());
    }
}
