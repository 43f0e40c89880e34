//! Stdin-fed sample source.
//!
//! A background reader thread parses lines from stdin and pushes them
//! through a channel; `poll` drains the channel without blocking.
//!
//! Accepted line formats:
//! - `<value>` - a bare number, stamped with the current UTC time
//! - `<rfc3339-timestamp>,<value>` - an explicit timestamp

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use chrono::{DateTime, Utc};

use super::SampleSource;
use crate::data::Sample;

#[derive(Debug)]
pub struct StdinSource {
    receiver: Receiver<Result<Sample, String>>,
    description: String,
    last_error: Option<String>,
}

impl StdinSource {
    /// Spawn the reader thread and return the source.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if tx.send(parse_line(&line)).is_err() {
                    break;
                }
            }
        });
        Self {
            receiver: rx,
            description: "stdin".to_string(),
            last_error: None,
        }
    }
}

impl SampleSource for StdinSource {
    fn poll(&mut self) -> Option<Sample> {
        match self.receiver.try_recv() {
            Ok(Ok(sample)) => {
                self.last_error = None;
                Some(sample)
            }
            Ok(Err(e)) => {
                self.last_error = Some(e);
                None
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.last_error = Some("stdin closed".to_string());
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

fn parse_line(line: &str) -> Result<Sample, String> {
    match line.split_once(',') {
        Some((ts, value)) => {
            let timestamp: DateTime<Utc> = ts
                .trim()
                .parse()
                .map_err(|e| format!("bad timestamp {:?}: {}", ts.trim(), e))?;
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|e| format!("bad value {:?}: {}", value.trim(), e))?;
            Ok(Sample::new(timestamp, value))
        }
        None => {
            let value: f64 = line
                .parse()
                .map_err(|e| format!("bad value {:?}: {}", line, e))?;
            Ok(Sample::new(Utc::now(), value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_bare_value() {
        let sample = parse_line("42.5").unwrap();
        assert_eq!(sample.value, 42.5);
    }

    #[test]
    fn test_parse_timestamped_value() {
        let sample = parse_line("2026-08-30T12:00:00Z,88.25").unwrap();
        assert_eq!(
            sample.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
        );
        assert_eq!(sample.value, 88.25);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_line("not-a-number").is_err());
        assert!(parse_line("yesterday,42").is_err());
        assert!(parse_line("2026-08-30T12:00:00Z,high").is_err());
    }
}
