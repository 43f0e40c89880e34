//! Signal graph panel.
//!
//! Plots the windowed samples as a scatter trace inside the configured
//! y display range, overlays up to four horizontal band reference lines,
//! and re-plots the latest sample as a highlighted marker colored by its
//! classification.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::Classification;

/// Render the graph panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let monitor = &app.monitor;
    let config = monitor.config();
    let bands = monitor.bands();
    let theme = &app.theme;

    let block = Block::default()
        .title(" Signal ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    // Empty buffer: placeholder instead of an empty chart
    let Some((x_start, x_end)) = monitor.x_bounds() else {
        let placeholder = Paragraph::new("no data")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let x_lo = to_x(x_start);
    let x_hi = to_x(x_end);

    let window = monitor.window();
    let points: Vec<(f64, f64)> = window
        .iter()
        .map(|s| (to_x(s.timestamp), s.value))
        .collect();
    // x_bounds is Some, so the window has at least one sample
    let current = [points[points.len() - 1]];
    let classification = monitor
        .classify_latest()
        .unwrap_or(Classification::Nominal);

    // Band reference lines span the visible x range, one per set bound
    let mut band_lines: Vec<(&'static str, f64, Color)> = Vec::new();
    if bands.enabled {
        if let Some(v) = bands.limit_max {
            band_lines.push(("Limit max", v, theme.limit));
        }
        if let Some(v) = bands.limit_min {
            band_lines.push(("Limit min", v, theme.limit));
        }
        if let Some(v) = bands.tolerance_max {
            band_lines.push(("Tol. max", v, theme.tolerance));
        }
        if let Some(v) = bands.tolerance_min {
            band_lines.push(("Tol. min", v, theme.tolerance));
        }
    }
    let line_data: Vec<[(f64, f64); 2]> = band_lines
        .iter()
        .map(|&(_, v, _)| [(x_lo, v), (x_hi, v)])
        .collect();

    let mut datasets: Vec<Dataset> = band_lines
        .iter()
        .zip(line_data.iter())
        .map(|(&(name, _, color), data)| {
            Dataset::default()
                .name(name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name("Signal")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.signal))
            .data(&points),
    );

    let current_color = if bands.enabled {
        theme.classification_color(classification)
    } else {
        theme.signal
    };
    datasets.push(
        Dataset::default()
            .name("Current")
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(current_color))
            .data(&current),
    );

    let x_mid = x_start + (x_end - x_start) / 2;
    let x_axis = Axis::default()
        .title(config.x_unit.clone())
        .style(Style::default().fg(theme.border))
        .bounds([x_lo, x_hi])
        .labels(vec![fmt_time(x_start), fmt_time(x_mid), fmt_time(x_end)]);

    let y_axis = Axis::default()
        .title(config.y_unit.clone())
        .style(Style::default().fg(theme.border))
        .bounds([config.y_min, config.y_max])
        .labels(y_labels(config.y_min, config.y_max));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Timestamp to chart x coordinate (fractional epoch seconds).
fn to_x(timestamp: DateTime<Utc>) -> f64 {
    timestamp.timestamp_millis() as f64 / 1000.0
}

fn fmt_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

fn y_labels(y_min: f64, y_max: f64) -> Vec<String> {
    const STEPS: usize = 4;
    (0..=STEPS)
        .map(|i| y_min + (y_max - y_min) * i as f64 / STEPS as f64)
        .map(|v| format!("{:.0}", v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_x_is_fractional_epoch_seconds() {
        let ts = Utc.timestamp_opt(100, 500_000_000).unwrap();
        assert!((to_x(ts) - 100.5).abs() < 1e-9);
    }

    #[test]
    fn test_y_labels_span_the_range() {
        let labels = y_labels(0.0, 100.0);
        assert_eq!(labels.first().unwrap(), "0");
        assert_eq!(labels.last().unwrap(), "100");
        assert_eq!(labels.len(), 5);
    }
}
