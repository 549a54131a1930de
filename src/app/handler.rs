//! Input handling — maps key, paste, and clock events to state mutations.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;
use crate::core::dashboard::{Screen, TOOLS};

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view and screen.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Help => handle_help_key(state, key),
        ActiveView::Main => match state.screen {
            Screen::Dashboard => handle_dashboard_key(state, key),
            Screen::DiffViewer => handle_diff_key(state, key),
        },
    }
}

/// Bracketed paste goes into the focused diff input.
pub fn handle_paste(state: &mut AppState, text: &str) {
    if state.active_view != ActiveView::Main || state.screen != Screen::DiffViewer {
        return;
    }
    state.diff.focused_buffer().insert_str(text);
    state.diff.recompute();
}

/// Refresh the dashboard's wall-clock reading.
pub fn handle_clock_tick(state: &mut AppState, now: NaiveDateTime) {
    state.dashboard.now = now;
}

/// Actions that behave the same on every screen.  Returns `true` if handled.
fn handle_global_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::Quit => state.should_quit = true,
        Action::ShowHelp => state.active_view = ActiveView::Help,
        Action::SwitchScreen => {
            let next = state.screen.toggle();
            state.switch_screen(next);
        }
        _ => return false,
    }
    true
}

// ── Dashboard ───────────────────────────────────────────────────

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        open_selected_tool(state);
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    if handle_global_action(state, action) {
        return;
    }

    match action {
        Action::ToggleFocus => {
            state.dashboard.focus_mode = !state.dashboard.focus_mode;
            state.status_message = Some(if state.dashboard.focus_mode {
                "Focus mode on".into()
            } else {
                "Focus mode off".into()
            });
        }
        Action::MoveUp => {
            state.dashboard.selected_tool = state.dashboard.selected_tool.saturating_sub(1);
        }
        Action::MoveDown => {
            if state.dashboard.selected_tool + 1 < TOOLS.len() {
                state.dashboard.selected_tool += 1;
            }
        }
        _ => {}
    }
}

fn open_selected_tool(state: &mut AppState) {
    // The tool list is hidden in focus mode.
    if state.dashboard.focus_mode {
        return;
    }
    let Some(tool) = TOOLS.get(state.dashboard.selected_tool) else {
        return;
    };
    match tool.screen {
        Some(screen) => state.switch_screen(screen),
        None => state.status_message = Some(format!("{} is not available yet", tool.name)),
    }
}

// ── Diff viewer ─────────────────────────────────────────────────

fn handle_diff_key(state: &mut AppState, key: KeyEvent) {
    if let Some(action) = state.config.match_key(key) {
        if handle_global_action(state, action) {
            return;
        }
        match action {
            Action::ToggleView => {
                state.diff.view_mode = state.diff.view_mode.toggle();
                state.diff.scroll = 0;
                state.status_message = Some(format!("View: {}", state.diff.view_mode.label()));
                return;
            }
            Action::ClearAll => {
                state.diff.clear_all();
                state.status_message = Some("Inputs cleared".into());
                return;
            }
            Action::SwitchInput => {
                state.diff.focused = state.diff.focused.other();
                return;
            }
            Action::ScrollUp => {
                state.diff.scroll = state.diff.scroll.saturating_sub(SCROLL_STEP);
                return;
            }
            Action::ScrollDown => {
                state.diff.scroll = state.diff.scroll.saturating_add(SCROLL_STEP);
                return;
            }
            // Dashboard-only actions fall through so their keys still edit.
            Action::MoveUp | Action::MoveDown | Action::ToggleFocus => {}
            Action::Quit | Action::ShowHelp | Action::SwitchScreen => return,
        }
    }

    if key.code == KeyCode::BackTab {
        state.diff.focused = state.diff.focused.other();
        return;
    }

    if handle_editor_key(state, key) {
        state.diff.recompute();
    }
}

/// Rows moved per scroll action in the rendered diff.
const SCROLL_STEP: usize = 10;

/// Apply an editing key to the focused input.  Returns `true` when the text
/// changed and the diff must be recomputed.
fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> bool {
    let buf = state.diff.focused_buffer();
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            buf.insert(c);
            true
        }
        KeyCode::Enter => {
            buf.insert_newline();
            true
        }
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete(),
        KeyCode::Left => {
            buf.move_left();
            false
        }
        KeyCode::Right => {
            buf.move_right();
            false
        }
        KeyCode::Up => {
            buf.move_up();
            false
        }
        KeyCode::Down => {
            buf.move_down();
            false
        }
        KeyCode::Home => {
            buf.move_home();
            false
        }
        KeyCode::End => {
            buf.move_end();
            false
        }
        _ => false,
    }
}

// ── Help popup ──────────────────────────────────────────────────

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    if state.config.match_key(key) == Some(Action::Quit) {
        state.should_quit = true;
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => {
            state.active_view = ActiveView::Main;
        }
        KeyCode::Char('r') => {
            state.config.reset_defaults();
            state.status_message = Some(match state.config.save() {
                Ok(()) => "Key bindings reset to defaults".into(),
                Err(e) => {
                    tracing::warn!("saving config failed: {e}");
                    format!("Reset, but could not save: {e}")
                }
            });
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{DiffViewerState, InputSide};
    use crate::config::AppConfig;
    use crate::core::diff::SegmentKind;
    use crate::core::render::ViewMode;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(8, 30, 0))
            .expect("valid timestamp")
    }

    fn state_on(screen: Screen) -> AppState {
        AppState::new(
            screen,
            DiffViewerState::new(String::new(), String::new(), ViewMode::Split),
            now(),
            AppConfig::default(),
        )
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(state: &mut AppState, c: char) {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                press(state, KeyCode::Enter);
            } else {
                press(state, KeyCode::Char(c));
            }
        }
    }

    #[test]
    fn typing_recomputes_the_diff() {
        let mut state = state_on(Screen::DiffViewer);
        type_text(&mut state, "jk\n");
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.diff.focused, InputSide::Modified);
        type_text(&mut state, "jk\nnew\n");

        assert_eq!(state.diff.original.content(), "jk\n");
        assert_eq!(state.diff.modified.content(), "jk\nnew\n");
        let kinds: Vec<SegmentKind> = state.diff.segments.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentKind::Unchanged, SegmentKind::Added]);
        assert_eq!(state.diff.stats.added_lines, 1);
    }

    #[test]
    fn clear_all_empties_both_inputs() {
        let mut state = state_on(Screen::DiffViewer);
        type_text(&mut state, "a");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "b");
        assert!(!state.diff.segments.is_empty());

        ctrl(&mut state, 'l');
        assert!(state.diff.is_empty_input());
        assert!(state.diff.segments.is_empty());
    }

    #[test]
    fn toggle_view_flips_mode() {
        let mut state = state_on(Screen::DiffViewer);
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.diff.view_mode, ViewMode::Unified);
        ctrl(&mut state, 't');
        assert_eq!(state.diff.view_mode, ViewMode::Split);
    }

    #[test]
    fn paste_lands_in_focused_input_only_on_diff_screen() {
        let mut state = state_on(Screen::Dashboard);
        handle_paste(&mut state, "ignored");
        assert!(state.diff.is_empty_input());

        state.switch_screen(Screen::DiffViewer);
        handle_paste(&mut state, "x\r\ny\n");
        assert_eq!(state.diff.original.content(), "x\ny\n");
        assert_eq!(state.diff.segments.len(), 1);
        assert_eq!(state.diff.segments[0].kind, SegmentKind::Removed);
    }

    #[test]
    fn dashboard_navigation_and_focus_mode() {
        let mut state = state_on(Screen::Dashboard);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.dashboard.selected_tool, 2);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.status_message.is_some());

        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.dashboard.selected_tool, 0);

        press(&mut state, KeyCode::F(5));
        assert!(state.dashboard.focus_mode);
        // The tool list is hidden, so Enter does nothing.
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen, Screen::Dashboard);

        ctrl(&mut state, 'f');
        assert!(!state.dashboard.focus_mode);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen, Screen::DiffViewer);
    }

    #[test]
    fn dashboard_keys_still_type_in_diff_viewer() {
        let mut state = state_on(Screen::DiffViewer);
        type_text(&mut state, "kj");
        assert_eq!(state.diff.original.content(), "kj");
        press(&mut state, KeyCode::Up);
        assert_eq!(state.diff.original.cursor(), 0);
    }

    #[test]
    fn switch_screen_and_help_overlay() {
        let mut state = state_on(Screen::Dashboard);
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.screen, Screen::DiffViewer);

        press(&mut state, KeyCode::F(1));
        assert_eq!(state.active_view, ActiveView::Help);
        // Typing while help is open does not edit.
        press(&mut state, KeyCode::Char('x'));
        assert!(state.diff.is_empty_input());
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.active_view, ActiveView::Main);

        ctrl(&mut state, 'o');
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn quit_bindings() {
        let mut state = state_on(Screen::DiffViewer);
        ctrl(&mut state, 'q');
        assert!(state.should_quit);

        let mut state = state_on(Screen::Dashboard);
        ctrl(&mut state, 'c');
        assert!(state.should_quit);
    }

    #[test]
    fn scroll_saturates_at_top() {
        let mut state = state_on(Screen::DiffViewer);
        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.diff.scroll, SCROLL_STEP);
        press(&mut state, KeyCode::PageUp);
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.diff.scroll, 0);
    }

    #[test]
    fn clock_tick_updates_now() {
        let mut state = state_on(Screen::Dashboard);
        let later = now() + chrono::Duration::hours(10);
        handle_clock_tick(&mut state, later);
        assert_eq!(state.dashboard.now, later);
    }
}
