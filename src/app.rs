//! Application state for the terminal embedding.

use std::time::{Duration, Instant};

use crate::monitor::Monitor;
use crate::source::SampleSource;
use crate::ui::Theme;

/// Main application state: one monitor, one sample source, one theme.
pub struct App {
    pub running: bool,
    pub paused: bool,
    pub monitor: Monitor,
    source: Box<dyn SampleSource>,
    pub theme: Theme,
    /// When the monitor last received a sample.
    pub last_update: Option<Instant>,
    /// Temporary feedback shown in the status bar.
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(source: Box<dyn SampleSource>, monitor: Monitor) -> Self {
        Self {
            running: true,
            paused: false,
            monitor,
            source,
            theme: Theme::auto_detect(),
            last_update: None,
            status_message: None,
        }
    }

    /// Poll the source once and feed any sample into the monitor.
    ///
    /// Returns true if the monitor was updated (the caller then redraws).
    /// While paused, incoming samples are dropped rather than queued.
    pub fn tick(&mut self) -> bool {
        let Some(sample) = self.source.poll() else {
            return false;
        };
        if self.paused {
            return false;
        }
        self.monitor.update(sample.timestamp, sample.value);
        self.last_update = Some(Instant::now());
        true
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        let msg = if self.paused { "Paused" } else { "Resumed" };
        self.set_status_message(msg.to_string());
    }

    pub fn reset(&mut self) {
        self.monitor.reset();
        self.last_update = None;
        self.set_status_message("Buffer cleared".to_string());
    }

    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    pub fn source_error(&self) -> Option<&str> {
        self.source.error()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }
}
