//! Rendered diff widget: split (two columns) or unified (one stream).

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::diff::{DiffSegment, DiffStats};
use crate::core::render::{split_columns, unified_lines, RenderedLine, ViewMode, PLACEHOLDER};
use crate::ui::theme::Theme;

pub struct DiffWidget<'a> {
    pub segments: &'a [DiffSegment],
    pub stats: DiffStats,
    pub mode: ViewMode,
    /// Both inputs empty: show the prompt instead of a diff.
    pub empty_input: bool,
    /// Requested first row; clamped to the content height.
    pub scroll: usize,
}

impl<'a> Widget for DiffWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.empty_input {
            format!(" Diff · {} ", self.mode.label())
        } else if !self.stats.has_changes() {
            format!(" Diff · {} · identical ", self.mode.label())
        } else {
            format!(" Diff · {} · {} ", self.mode.label(), self.stats.summary())
        };
        let block = Block::default()
            .title(title)
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.empty_input {
            let y = inner.y + inner.height / 2;
            Paragraph::new(Line::from(Span::styled(PLACEHOLDER, Theme::placeholder_style())))
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
            return;
        }

        match self.mode {
            ViewMode::Unified => {
                let rows = unified_lines(self.segments);
                let offset = clamp_scroll(self.scroll, rows.len(), inner.height);
                let lines: Vec<Line> = rows
                    .iter()
                    .skip(offset)
                    .take(inner.height as usize)
                    .map(|r| styled_row(r, Some(r.old_no), Some(r.new_no)))
                    .collect();
                Paragraph::new(lines).render(inner, buf);
            }
            ViewMode::Split => {
                let view = split_columns(self.segments);
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(50),
                        Constraint::Length(1),
                        Constraint::Percentage(50),
                    ])
                    .split(inner);

                // Both columns scroll together.
                let total = view.left.len().max(view.right.len());
                let offset = clamp_scroll(self.scroll, total, inner.height);
                let column = |rows: &[RenderedLine], left: bool| -> Vec<Line<'static>> {
                    rows.iter()
                        .skip(offset)
                        .take(inner.height as usize)
                        .map(|r| {
                            if left {
                                styled_row(r, Some(r.old_no), None)
                            } else {
                                styled_row(r, None, Some(r.new_no))
                            }
                        })
                        .collect()
                };
                Paragraph::new(column(&view.left, true)).render(cols[0], buf);
                let divider: Vec<Line> = (0..inner.height)
                    .map(|_| Line::from(Span::styled("│", Theme::border_style())))
                    .collect();
                Paragraph::new(divider).render(cols[1], buf);
                Paragraph::new(column(&view.right, false)).render(cols[2], buf);
            }
        }
    }
}

fn clamp_scroll(requested: usize, total: usize, height: u16) -> usize {
    requested.min(total.saturating_sub(height as usize))
}

/// Line-number gutter(s) followed by the marker and text, coloured by kind.
fn styled_row(
    row: &RenderedLine,
    old: Option<Option<usize>>,
    new: Option<Option<usize>>,
) -> Line<'static> {
    let gutter = |n: Option<usize>| match n {
        Some(n) => format!("{n:>4} "),
        None => "     ".to_string(),
    };
    let mut spans = Vec::new();
    if let Some(n) = old {
        spans.push(Span::styled(gutter(n), Theme::line_number_style()));
    }
    if let Some(n) = new {
        spans.push(Span::styled(gutter(n), Theme::line_number_style()));
    }
    spans.push(Span::raw(format!("{}{}", row.prefix(), row.text)));
    Line::from(spans).style(Theme::segment_style(row.kind))
}
