//! Current-value readout panel.
//!
//! Shows the operation range summary and the latest sample: its value
//! styled by classification, plus UTC and local timestamp lines.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the readout panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let monitor = &app.monitor;
    let config = monitor.config();
    let bands = monitor.bands();
    let theme = &app.theme;

    let block = Block::default()
        .title(format!(" {} ", config.title))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    let unit = if bands.limit_min.is_some()
        || bands.limit_max.is_some()
        || bands.tolerance_min.is_some()
        || bands.tolerance_max.is_some()
    {
        config.y_unit.as_str()
    } else {
        ""
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                " Operation Range ({})",
                if bands.enabled { "on" } else { "off" }
            ),
            theme.header,
        )),
        Line::from(format!(
            "   Limit      min: {:<8} max: {:<8} {}",
            fmt_bound(bands.limit_min),
            fmt_bound(bands.limit_max),
            unit,
        )),
        Line::from(format!(
            "   Tolerance  min: {:<8} max: {:<8} {}",
            fmt_bound(bands.tolerance_min),
            fmt_bound(bands.tolerance_max),
            unit,
        )),
        Line::from(""),
        Line::from(Span::styled(" Current", theme.header)),
    ];

    match monitor.readout() {
        Some(readout) => {
            let value_style = theme.value_style(readout.classification, bands.enabled);
            lines.push(Line::from(Span::styled(
                format!("   {}", readout.text),
                value_style,
            )));
            if bands.enabled {
                lines.push(Line::from(Span::styled(
                    format!(
                        "   {} {}",
                        readout.classification.symbol(),
                        readout.classification.label()
                    ),
                    value_style,
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {}: ", capitalize(&config.x_unit)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(readout.utc),
            ]));
            lines.push(Line::from(vec![
                Span::styled("   Local: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(readout.local),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "   waiting for samples...",
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn fmt_bound(bound: Option<f64>) -> String {
    match bound {
        Some(v) => format!("{:.2}", v),
        None => "None".to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_bound() {
        assert_eq!(fmt_bound(Some(90.0)), "90.00");
        assert_eq!(fmt_bound(None), "None");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("utc"), "Utc");
        assert_eq!(capitalize(""), "");
    }
}
