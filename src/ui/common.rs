//! Header and status bars.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::duration::format_age;

/// Render the header bar: overall state dot, sample count, window size.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let monitor = &app.monitor;

    let (dot_style, state_label) = match monitor.classify_latest() {
        Some(classification) if monitor.bands().enabled => (
            Style::default().fg(app.theme.classification_color(classification)),
            classification.label(),
        ),
        Some(_) => (Style::default().fg(app.theme.signal), "Signal"),
        None => (
            Style::default().add_modifier(Modifier::DIM),
            "Waiting",
        ),
    };

    let line = Line::from(vec![
        Span::styled(" ● ", dot_style),
        Span::styled("OPSCOPE ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(state_label, dot_style.add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            " │ {} samples │ window {}",
            monitor.len(),
            monitor.config().window_size
        )),
        if app.paused {
            Span::styled(" │ PAUSED", Style::default().add_modifier(Modifier::BOLD))
        } else {
            Span::raw("")
        },
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar: source, last-update age, controls.
///
/// Source errors and temporary status messages take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.signal));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(err) = app.source_error() {
        format!(" {} | {} | p:pause r:reset q:quit", app.source_description(), err)
    } else {
        let age = match app.last_update {
            Some(at) => format!("Updated {} ago", format_age(at.elapsed())),
            None => "Waiting for data".to_string(),
        };
        format!(
            " {} | {} | p:pause r:reset q:quit",
            app.source_description(),
            age
        )
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}
