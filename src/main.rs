use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

use opscope::config::{self, MonitorConfig, SeedData};
use opscope::data::duration::parse_duration;
use opscope::data::{BoundSpec, ThresholdSpec};
use opscope::source::{ReplaySource, SampleSource, StdinSource, WaveSource};
use opscope::{events, ui, App, Monitor};

#[derive(Parser, Debug)]
#[command(name = "opscope")]
#[command(about = "Monitor a live signal against operation limit and tolerance bands")]
struct Args {
    /// Monitor title
    #[arg(long, default_value = config::DEFAULT_TITLE)]
    title: String,

    /// Unit label for the value axis
    #[arg(long, default_value = "%")]
    y_unit: String,

    /// Label for the time axis
    #[arg(long, default_value = "utc")]
    x_unit: String,

    /// Maximum number of most-recent samples shown on the graph
    #[arg(short, long, default_value_t = config::DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Lower bound of the y display range
    #[arg(long, default_value_t = config::DEFAULT_Y_MIN)]
    y_min: f64,

    /// Upper bound of the y display range
    #[arg(long, default_value_t = config::DEFAULT_Y_MAX)]
    y_max: f64,

    /// X-axis padding before the earliest shown sample (e.g. "1s", "500ms")
    #[arg(long, default_value = "1s", value_parser = parse_duration)]
    pre_tick: Duration,

    /// X-axis padding after the latest shown sample
    #[arg(long, default_value = "1s", value_parser = parse_duration)]
    post_tick: Duration,

    /// Enable the operation range (limit/tolerance bands)
    #[arg(short, long)]
    thresholds: bool,

    /// Hard lower limit
    #[arg(long)]
    limit_min: Option<f64>,

    /// Hard upper limit
    #[arg(long)]
    limit_max: Option<f64>,

    /// Lower tolerance bound: absolute value or percentage of the limit span (e.g. "10%")
    #[arg(long)]
    tol_min: Option<BoundSpec>,

    /// Upper tolerance bound: absolute value or percentage of the limit span
    #[arg(long)]
    tol_max: Option<BoundSpec>,

    /// Pre-seed the buffer from a JSON file of paired timestamps/values
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Replay samples from a JSON file instead of generating a demo wave
    #[arg(long, conflicts_with = "stdin")]
    replay: Option<PathBuf>,

    /// Read samples from stdin ("<value>" or "<rfc3339>,<value>" per line)
    #[arg(long)]
    stdin: bool,

    /// Emission interval for replay and demo-wave sources
    #[arg(short, long, default_value = "1s", value_parser = parse_duration)]
    interval: Duration,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let seed = match &args.seed {
        Some(path) => Some(SeedData::load(path)?),
        None => None,
    };

    let config = MonitorConfig {
        title: args.title.clone(),
        y_unit: args.y_unit.clone(),
        x_unit: args.x_unit.clone(),
        window_size: args.window,
        y_min: args.y_min,
        y_max: args.y_max,
        x_pre_tick: args.pre_tick,
        x_post_tick: args.post_tick,
        thresholds: ThresholdSpec {
            enabled: args.thresholds,
            limit_min: args.limit_min,
            limit_max: args.limit_max,
            tolerance_min: args.tol_min,
            tolerance_max: args.tol_max,
        },
        seed,
    };

    let source: Box<dyn SampleSource> = if let Some(ref path) = args.replay {
        Box::new(ReplaySource::from_file(path, args.interval)?)
    } else if args.stdin {
        Box::new(StdinSource::spawn())
    } else {
        Box::new(WaveSource::new(args.y_min, args.y_max, args.interval))
    };

    run_tui(source, Monitor::new(config))
}

/// Run the TUI with the given sample source
fn run_tui(source: Box<dyn SampleSource>, monitor: Monitor) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(source, monitor);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 70;
    const MIN_HEIGHT: u16 = 14;

    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered =
                    ratatui::layout::Rect::new(0, area.height.saturating_sub(4) / 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);

            // Readout on the left, graph fills the rest
            let content = Layout::horizontal([Constraint::Length(44), Constraint::Min(24)])
                .split(chunks[1]);
            ui::readout::render(frame, app, content[0]);
            ui::graph::render(frame, app, content[1]);

            ui::common::render_status_bar(frame, app, chunks[2]);
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Pull pending samples; the next draw picks them up. Bounded so
        // a zero-interval source cannot starve the event loop.
        for _ in 0..256 {
            if !app.tick() {
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_args_parse() {
        let args = Args::try_parse_from([
            "opscope",
            "--pre-tick",
            "500ms",
            "--post-tick",
            "2s",
            "--interval",
            "250ms",
        ])
        .unwrap();

        assert_eq!(args.pre_tick, Duration::from_millis(500));
        assert_eq!(args.post_tick, Duration::from_secs(2));
        assert_eq!(args.interval, Duration::from_millis(250));
    }

    #[test]
    fn test_bad_duration_arg_is_rejected() {
        assert!(Args::try_parse_from(["opscope", "--interval", "fast"]).is_err());
        assert!(Args::try_parse_from(["opscope", "--pre-tick", "-1s"]).is_err());
    }

    #[test]
    fn test_duration_args_default_to_one_second() {
        let args = Args::try_parse_from(["opscope"]).unwrap();
        assert_eq!(args.pre_tick, Duration::from_secs(1));
        assert_eq!(args.interval, Duration::from_secs(1));
    }
}
