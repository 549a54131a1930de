//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::Instant;

use chrono::NaiveDateTime;

use crate::config::AppConfig;
use crate::core::{
    buffer::TextBuffer,
    dashboard::Screen,
    diff::{compute_diff, DiffSegment, DiffStats},
    render::{is_empty_input, ViewMode},
};

/// Which overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Main,
    Help,
}

/// Which diff input receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSide {
    #[default]
    Original,
    Modified,
}

impl InputSide {
    pub fn other(self) -> Self {
        match self {
            InputSide::Original => InputSide::Modified,
            InputSide::Modified => InputSide::Original,
        }
    }
}

/// Diff viewer screen state.  `segments` and `stats` are derived from the
/// two buffers and refreshed by [`DiffViewerState::recompute`].
#[derive(Debug, Default)]
pub struct DiffViewerState {
    pub original: TextBuffer,
    pub modified: TextBuffer,
    pub focused: InputSide,
    pub view_mode: ViewMode,
    pub segments: Vec<DiffSegment>,
    pub stats: DiffStats,
    /// First visible row of the rendered diff.
    pub scroll: usize,
}

impl DiffViewerState {
    pub fn new(original: String, modified: String, view_mode: ViewMode) -> Self {
        let mut state = Self {
            original: TextBuffer::with_content(original),
            modified: TextBuffer::with_content(modified),
            view_mode,
            ..Self::default()
        };
        state.recompute();
        state
    }

    /// Full synchronous recompute from both buffers.
    pub fn recompute(&mut self) {
        let t0 = Instant::now();
        self.segments = compute_diff(self.original.content(), self.modified.content());
        self.stats = DiffStats::from_segments(&self.segments);
        tracing::debug!(
            "recompute diff: {:.2?} segments={} {}",
            t0.elapsed(),
            self.segments.len(),
            self.stats.summary()
        );
    }

    pub fn focused_buffer(&mut self) -> &mut TextBuffer {
        match self.focused {
            InputSide::Original => &mut self.original,
            InputSide::Modified => &mut self.modified,
        }
    }

    /// Reset both inputs to empty.
    pub fn clear_all(&mut self) {
        self.original.clear();
        self.modified.clear();
        self.scroll = 0;
        self.recompute();
    }

    /// Both inputs empty: render the placeholder instead of a diff.
    pub fn is_empty_input(&self) -> bool {
        is_empty_input(self.original.content(), self.modified.content())
    }
}

/// Dashboard screen state.
#[derive(Debug)]
pub struct DashboardState {
    pub focus_mode: bool,
    /// Highlighted row in the tool list.
    pub selected_tool: usize,
    /// Last wall-clock reading, refreshed by the clock timer.
    pub now: NaiveDateTime,
}

impl DashboardState {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            focus_mode: false,
            selected_tool: 0,
            now,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    /// Which screen is shown.
    pub screen: Screen,
    pub diff: DiffViewerState,
    pub dashboard: DashboardState,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Which overlay is shown.
    pub active_view: ActiveView,
    /// User-configurable keybindings and defaults.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(screen: Screen, diff: DiffViewerState, now: NaiveDateTime, config: AppConfig) -> Self {
        Self {
            screen,
            diff,
            dashboard: DashboardState::new(now),
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
        }
    }

    /// Navigate to `screen`.  Only the screen identity crosses over.
    pub fn switch_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::info!("screen: {} -> {}", self.screen.title(), screen.title());
            self.screen = screen;
            self.status_message = None;
        }
    }
}
