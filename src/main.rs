//! Shake the window to scroll.
//!
//! Shows a "Terms of Use" window floating in the terminal.  There is no
//! scrollbar: drag the window around quickly (or hammer the arrow keys) and
//! the shaking scrolls the text down; hold still and it springs back up.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stderr, Stderr};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    widgets::{Block, Paragraph},
    Terminal,
};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use crate::app::{
    document,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
    window::cell_size_px,
};
use crate::config::AppConfig;
use crate::core::motion::TICK_PERIOD;
use crate::ui::{
    layout::AppLayout,
    popup::{self, MessagePopup},
    terms_window::TermsWindow,
    theme::Theme,
};

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// How long the event reader blocks in one poll.
const EVENT_POLL: Duration = Duration::from_millis(50);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Shake the window to scroll the terms")]
struct Cli {
    /// Text file to display (defaults to the bundled terms).
    text: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Overwrite the config file with defaults before starting.
    #[arg(long)]
    reset_config: bool,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            // Only when RUST_LOG is set; stderr is also the TUI backend.
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = if cli.reset_config {
        let config = AppConfig::default();
        config.save()?;
        config
    } else {
        AppConfig::load()
    };

    let body = document::load_body(cli.text.as_deref())?;
    let cell_px = cell_size_px();

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode().context("could not enable raw mode")?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config, body, cell_px).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Tui,
    config: AppConfig,
    body: String,
    cell_px: (f64, f64),
) -> Result<()> {
    let size = terminal.size()?;
    let desktop = AppLayout::from_area(Rect::new(0, 0, size.width, size.height)).desktop_area;

    tracing::info!("starting with {}ms ticks", TICK_PERIOD.as_millis());
    let mut state = AppState::new(config, desktop, cell_px, body, Instant::now());

    // ── periodic tasks ────────────────────────────────────────
    // Two independent timers at the same period.  Both arms run inside this
    // one task, so they never overlap and each gets `&mut` state in turn.
    let mut sample_timer = tokio::time::interval(TICK_PERIOD);
    sample_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut integrate_timer = tokio::time::interval(TICK_PERIOD);
    integrate_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut events = spawn_event_reader(EVENT_POLL);

    // ── event loop ────────────────────────────────────────────
    loop {
        if state.needs_redraw {
            state.needs_redraw = false;
            draw(terminal, &state)?;
        }

        tokio::select! {
            maybe_event = events.recv() => {
                let Some(event) = maybe_event else {
                    tracing::warn!("event reader stopped");
                    break;
                };
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(w, h) => {
                        let desktop = AppLayout::from_area(Rect::new(0, 0, w, h)).desktop_area;
                        state.resize(desktop, cell_size_px());
                    }
                }
            }

            _ = sample_timer.tick() => {
                state.motion.sample_tick(&state.window, Instant::now());
            }

            _ = integrate_timer.tick() => {
                let before = (state.terms.row_offset(), ratio_percent(state.motion.state().ratio));
                state.motion.integrate_tick(&mut state.terms, Instant::now());
                let after = (state.terms.row_offset(), ratio_percent(state.motion.state().ratio));
                if before != after {
                    state.needs_redraw = true;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Ratio at status-bar resolution.
fn ratio_percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

fn draw(terminal: &mut Tui, state: &AppState) -> Result<()> {
    terminal.draw(|frame| {
        let layout = AppLayout::from_area(frame.area());

        frame.render_widget(Block::default().style(Theme::desktop_style()), layout.desktop_area);
        frame.render_widget(TermsWindow { state }, layout.desktop_area);

        let status_text = format!(
            " {} | scroll {:>3}%",
            state.config.status_bar_hint(),
            ratio_percent(state.motion.state().ratio),
        );
        let status = Paragraph::new(status_text).style(Theme::status_bar_style());
        frame.render_widget(status, layout.status_area);

        let message = match state.active_view {
            ActiveView::Instruction => Some((popup::INSTRUCTION_TITLE, popup::INSTRUCTION_TEXT)),
            ActiveView::Agreed => Some((popup::AGREED_TITLE, popup::AGREED_TEXT)),
            ActiveView::Terms => None,
        };
        if let Some((title, message)) = message {
            frame.render_widget(MessagePopup { title, message }, layout.desktop_area);
        }
    })?;
    Ok(())
}
