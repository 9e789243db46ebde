//! A scroll-synchronised animation showcase for the terminal.
//!
//! Scroll through a marketing page whose pinned sections animate with the
//! scroll position: a phone walkthrough, a shrinking video frame, a
//! pointer-driven testimonial marquee and a spinning globe of markers.
//! Run with `--print-config` to see the effective tuning.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr, Stderr};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::core::markers::{builtin_markers, load_markers};
use crate::core::smoother::SmoothingMode;
use crate::ui::{layout::AppLayout, page_view::PageView, popup, status::StatusBar};

/// Longest frame step fed to the smoothers, in seconds.
const MAX_FRAME_DT: f64 = 0.1;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll-synchronised terminal animation showcase")]
struct Cli {
    /// Section to open at (0 = top of the page).
    #[arg(long, default_value_t = 0)]
    section: usize,

    /// File of `lat,lng,label` lines to place on the globe.
    #[arg(long)]
    markers: Option<PathBuf>,

    /// Frame interval in milliseconds (8–100).
    #[arg(long = "frame-ms")]
    frame_ms: Option<u64>,

    /// Use spring smoothing for the phone track.
    #[arg(long)]
    spring: bool,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,
}

type Term = Terminal<CrosstermBackend<Stderr>>;

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only emits when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let mut config = config::AppConfig::load();
    if let Some(ms) = cli.frame_ms {
        config.frame_ms = ms.clamp(8, 100);
    }
    if cli.spring {
        config.motion.smoothing = SmoothingMode::Spring;
    }

    if cli.print_config {
        print!("{}", config.to_text());
        return Ok(());
    }

    let markers = match &cli.markers {
        Some(path) => load_markers(path)?,
        None => builtin_markers(),
    };
    let mut state = AppState::new(config, markers);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    state.set_page_area(AppLayout::from_area(Rect::new(0, 0, size.width, size.height)).page_area);
    if cli.section > 0 {
        state.jump_to_section(cli.section);
    }

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

// ───────────────────────────────────────── event loop ────────

async fn run(terminal: &mut Term, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(state.frame_interval.clone());
    let mut last_frame = Instant::now();

    loop {
        // ── animation frame ───────────────────────────────────
        let interval = Duration::from_millis(state.frame_ms());
        let animating = state.is_animating();
        if animating {
            let elapsed = last_frame.elapsed();
            if elapsed >= interval {
                last_frame = Instant::now();
                state.advance(elapsed.as_secs_f64().min(MAX_FRAME_DT));
            }
        } else {
            last_frame = Instant::now();
        }

        // ── draw only when something changed ─────────────────
        if state.needs_redraw {
            state.needs_redraw = false;
            terminal.draw(|frame| {
                let layout = AppLayout::from_area(frame.area());
                state.set_page_area(layout.page_area);
                let state = &*state;

                frame.render_widget(PageView { state }, layout.page_area);
                frame.render_widget(StatusBar { state }, layout.status_area);

                match state.active_view {
                    ActiveView::SettingsMenu => {
                        frame.render_widget(
                            popup::SettingsPopup {
                                selected: state.settings_selected,
                                state,
                            },
                            frame.area(),
                        );
                    }
                    ActiveView::ControlsSubmenu => {
                        frame.render_widget(
                            popup::ControlsPopup {
                                config: &state.config,
                                selected: state.controls_selected,
                                awaiting_rebind: state.awaiting_rebind,
                            },
                            frame.area(),
                        );
                    }
                    ActiveView::Page => {}
                }
            })?;
        }

        // Settled: nothing to schedule until input arrives.
        let event = if animating || state.is_animating() {
            tokio::select! {
                biased;

                event = events.recv() => Some(event),
                // Keeps frames coming while input floods the channel.
                _ = tokio::time::sleep(interval) => None,
            }
        } else {
            Some(events.recv().await)
        };

        match event {
            Some(Some(AppEvent::Key(k))) => handler::handle_key(state, k),
            Some(Some(AppEvent::Mouse(m))) => handler::handle_mouse(state, m),
            Some(Some(AppEvent::Resize(w, h))) => {
                state.set_page_area(AppLayout::from_area(Rect::new(0, 0, w, h)).page_area);
                state.needs_redraw = true;
            }
            Some(Some(AppEvent::FocusGained)) => state.set_focused(true),
            Some(Some(AppEvent::FocusLost)) => state.set_focused(false),
            Some(Some(AppEvent::Tick)) | None => {}
            Some(None) => break,
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
