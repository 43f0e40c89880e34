//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.
//! All presentation colors live here; domain code only produces
//! [`Classification`] values.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::Classification;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the plain signal trace and for the current value when
    /// thresholds are disabled.
    pub signal: Color,
    /// Color for a nominal current value (thresholds enabled).
    pub nominal: Color,
    /// Color for a tolerance breach.
    pub tolerance: Color,
    /// Color for a limit breach.
    pub limit: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section headers.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            signal: Color::LightBlue,
            nominal: Color::Green,
            tolerance: Color::Yellow,
            limit: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            signal: Color::Blue,
            nominal: Color::Green,
            tolerance: Color::Yellow,
            limit: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for a classification.
    pub fn classification_color(&self, classification: Classification) -> Color {
        match classification {
            Classification::Nominal => self.nominal,
            Classification::Tolerance => self.tolerance,
            Classification::Limit => self.limit,
        }
    }

    /// Style for the current-value readout.
    ///
    /// With thresholds disabled everything is Nominal; the value is shown
    /// in the plain signal color instead of the nominal green.
    pub fn value_style(&self, classification: Classification, thresholds_enabled: bool) -> Style {
        if !thresholds_enabled {
            return Style::default().fg(self.signal).add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.classification_color(classification))
            .add_modifier(Modifier::BOLD)
    }
}
