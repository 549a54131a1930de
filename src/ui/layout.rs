//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout with a body and a bottom status bar.
pub struct AppLayout {
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // screen body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            body_area: chunks[0],
            status_area: chunks[1],
        }
    }
}

/// Diff viewer regions: two inputs side by side above the rendered diff.
pub struct DiffLayout {
    pub original_area: Rect,
    pub modified_area: Rect,
    pub output_area: Rect,
}

impl DiffLayout {
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Min(3)])
            .split(area);
        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        Self {
            original_area: inputs[0],
            modified_area: inputs[1],
            output_area: rows[1],
        }
    }
}

/// Dashboard regions: greeting header above a two-column widget area.
pub struct DashboardLayout {
    pub header_area: Rect,
    pub left_area: Rect,
    pub right_area: Rect,
}

impl DashboardLayout {
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        Self {
            header_area: rows[0],
            left_area: cols[0],
            right_area: cols[1],
        }
    }
}
