//! Journey dashboard - interactive terminal view of the route comparison
//!
//! Shows:
//! - Journey time per stage for all three travelers, with a stage tooltip
//! - Physical effort map of the selected traveler's path
//! - Elevator outage history and time impact call-outs
//!
//! Logs go to the configured file; the terminal belongs to the dashboard.

use access_journeys::domain::dataset;
use access_journeys::infra::{init_logging, Config, LogSink};
use access_journeys::view::{App, Control};
use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// Journey dashboard
#[derive(Parser, Debug)]
#[command(name = "access-journeys-tui", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref());
    if let Err(e) = init_logging(&config, LogSink::file_from(&config)) {
        eprintln!("Warning: {:#}. Continuing without logs.", e);
    }

    let data = dataset();
    data.validate().context("Dataset failed validation")?;
    info!(
        config_file = %config.config_file(),
        default_profile = %config.default_profile(),
        "dashboard_starting"
    );

    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(data, &config);
    let result = run_ui(&mut terminal, &mut app, Duration::from_millis(config.tick_rate_ms()));
    drop(guard);

    info!(profile = %app.selected(), "dashboard_stopped");
    result
}

/// Runs `restore` when dropped, on every exit path after raw mode is on
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "raw_mode_restore_failed");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        warn!(error = %e, "screen_restore_failed");
    }
}

fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_>,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| app.draw(f))?;
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => app.invalidate(),
                _ => {}
            }
        }
    }
}
