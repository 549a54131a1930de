//! A terminal productivity dashboard with a line diff viewer.
//!
//! Run the binary to launch the interactive dashboard.
//! Run with `--print --original A --modified B` to write a rendered diff to
//! stdout without starting the TUI.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Frame, Terminal};

use crate::app::{
    clock::{sync_clock, ClockTimer},
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState, DiffViewerState, InputSide},
};
use crate::core::{
    dashboard::Screen,
    diff::{compute_diff, DiffStats},
    render::{format_diff_text, ViewMode},
};
use crate::ui::{
    dashboard::DashboardWidget,
    diff_view::DiffWidget,
    editor::EditorWidget,
    layout::{AppLayout, DiffLayout},
    popup::HelpPopup,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Productivity dashboard with a text diff viewer")]
struct Cli {
    /// Screen to open on launch.
    #[arg(long, value_enum, default_value_t = Screen::Dashboard)]
    screen: Screen,

    /// Diff presentation (defaults to the configured view).
    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Preload the original text from a file.
    #[arg(long)]
    original: Option<PathBuf>,

    /// Preload the modified text from a file.
    #[arg(long)]
    modified: Option<PathBuf>,

    /// Print the diff of `--original` and `--modified` to stdout and exit.
    #[arg(long)]
    print: bool,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        None => Ok(String::new()),
    }
}

// ───────────────────────────────────────── headless ──────────

/// Render the diff as plain text, followed by a `+A -R` summary line.
fn print_diff(
    out: &mut impl Write,
    original: &str,
    modified: &str,
    view: ViewMode,
) -> Result<()> {
    let body = format_diff_text(original, modified, view);
    let stats = DiffStats::from_segments(&compute_diff(original, modified));

    out.write_all(body.as_bytes())?;
    writeln!(out, "{}", stats.summary())?;
    Ok(())
}

// ───────────────────────────────────────── drawing ───────────

fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area());

    match state.screen {
        Screen::Dashboard => {
            let focus_hint = format!(
                "{}: leave focus mode",
                state.config.display_bindings(config::Action::ToggleFocus)
            );
            frame.render_widget(
                DashboardWidget {
                    state: &state.dashboard,
                    user_name: state.config.user_name.as_deref(),
                    focus_hint,
                },
                layout.body_area,
            );
        }
        Screen::DiffViewer => {
            let diff_layout = DiffLayout::from_area(layout.body_area);
            let diff = &state.diff;
            let original = EditorWidget {
                buffer: &diff.original,
                title: "Original",
                focused: diff.focused == InputSide::Original,
                placeholder: "Paste the original text here",
            };
            let modified = EditorWidget {
                buffer: &diff.modified,
                title: "Modified",
                focused: diff.focused == InputSide::Modified,
                placeholder: "Paste the modified text here",
            };

            if state.active_view == ActiveView::Main {
                let cursor = original
                    .cursor_position(diff_layout.original_area)
                    .or_else(|| modified.cursor_position(diff_layout.modified_area));
                if let Some(pos) = cursor {
                    frame.set_cursor_position(pos);
                }
            }

            frame.render_widget(original, diff_layout.original_area);
            frame.render_widget(modified, diff_layout.modified_area);
            frame.render_widget(
                DiffWidget {
                    segments: &diff.segments,
                    stats: diff.stats,
                    mode: diff.view_mode,
                    empty_input: diff.is_empty_input(),
                    scroll: diff.scroll,
                },
                diff_layout.output_area,
            );
        }
    }

    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Main => state.status_message.as_deref().unwrap_or(&hint),
        ActiveView::Help => "",
    };
    let status = Paragraph::new(format!(" {} · {status_text}", state.screen.title()))
        .style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);

    if state.active_view == ActiveView::Help {
        frame.render_widget(HelpPopup { config: &state.config }, frame.area());
    }
}

fn local_now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only emits when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let user_config = config::AppConfig::load();
    let view = cli.view.unwrap_or(user_config.default_view);

    let original = read_input(cli.original.as_deref())?;
    let modified = read_input(cli.modified.as_deref())?;

    // ── headless mode ─────────────────────────────────────────
    if cli.print {
        return print_diff(&mut io::stdout().lock(), &original, &modified, view);
    }

    let clock_period = Duration::from_secs(user_config.clock_refresh_secs);
    let diff = DiffViewerState::new(original, modified, view);
    let mut state = AppState::new(cli.screen, diff, local_now(), user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let (tx, mut events) = tokio::sync::mpsc::unbounded_channel::<AppEvent>();
    spawn_event_reader(Duration::from_millis(100), tx.clone());
    let mut clock: Option<ClockTimer> = None;

    // ── event loop ────────────────────────────────────────────
    loop {
        // The clock only runs while the dashboard is visible.
        sync_clock(&mut clock, state.screen, clock_period, &tx);

        terminal.draw(|frame| draw(frame, &state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Paste(text) => handler::handle_paste(&mut state, &text),
            AppEvent::ClockTick => handler::handle_clock_tick(&mut state, local_now()),
            AppEvent::Resize(_, _) | AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    drop(clock);
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_screen_and_view() {
        let cli = Cli::try_parse_from([
            "diffdash", "--screen", "diff", "--view", "unified", "--original", "a.txt",
        ])
        .expect("valid args");
        assert_eq!(cli.screen, Screen::DiffViewer);
        assert_eq!(cli.view, Some(ViewMode::Unified));
        assert_eq!(cli.original.as_deref(), Some(Path::new("a.txt")));
        assert!(!cli.print);
    }

    #[test]
    fn cli_rejects_unknown_view() {
        assert!(Cli::try_parse_from(["diffdash", "--view", "sideways"]).is_err());
    }

    #[test]
    fn print_diff_writes_placeholder_for_empty_inputs() {
        let mut out = Vec::new();
        print_diff(&mut out, "", "", ViewMode::Unified).expect("write");
        let text = String::from_utf8(out).expect("utf-8");
        assert_eq!(text, format!("{}\n+0 -0\n", crate::core::render::PLACEHOLDER));
    }

    #[test]
    fn print_diff_appends_summary() {
        let mut out = Vec::new();
        print_diff(&mut out, "a\nb\n", "a\nc\n", ViewMode::Unified).expect("write");
        let text = String::from_utf8(out).expect("utf-8");
        assert_eq!(text, "  a\n- b\n+ c\n+1 -1\n");
    }

    #[test]
    fn read_input_reports_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.txt");
        let err = read_input(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
        assert_eq!(read_input(None).expect("empty"), "");
    }
}
