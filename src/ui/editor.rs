//! Input pane widget for one side of the diff.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::buffer::TextBuffer;
use crate::ui::theme::Theme;

/// A bordered, scrolling view of a [`TextBuffer`].
pub struct EditorWidget<'a> {
    pub buffer: &'a TextBuffer,
    pub title: &'a str,
    pub focused: bool,
    pub placeholder: &'a str,
}

impl<'a> EditorWidget<'a> {
    fn block(&self) -> Block<'a> {
        let border = if self.focused {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        };
        let marker = if self.focused { "▸" } else { " " };
        Block::default()
            .title(format!(
                "{marker} {} ({} lines) ",
                self.title,
                self.buffer.line_count()
            ))
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
    }

    /// `(rows, cols)` to scroll so that the cursor stays inside `inner`.
    fn scroll(&self, inner: Rect) -> (u16, u16) {
        let (row, _) = self.buffer.cursor_row_col();
        let col = self.buffer.cursor_display_col();
        let h = inner.height.max(1) as usize;
        let w = inner.width.max(1) as usize;
        let v = row.saturating_sub(h - 1);
        let x = col.saturating_sub(w - 1);
        (v as u16, x as u16)
    }

    /// Terminal cursor position for the focused pane.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (v, x) = self.scroll(inner);
        let (row, _) = self.buffer.cursor_row_col();
        let col = self.buffer.cursor_display_col();
        Some(Position::new(
            inner.x + (col as u16).saturating_sub(x),
            inner.y + (row as u16).saturating_sub(v),
        ))
    }
}

impl<'a> Widget for EditorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.buffer.is_empty() && !self.focused {
            Paragraph::new(Line::from(Span::styled(self.placeholder, Theme::placeholder_style())))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .buffer
            .content()
            .split('\n')
            .map(|l| Line::raw(l.to_string()))
            .collect();
        Paragraph::new(lines)
            .scroll(self.scroll(inner))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor(buffer: &TextBuffer, focused: bool) -> EditorWidget<'_> {
        EditorWidget {
            buffer,
            title: "Original",
            focused,
            placeholder: "Paste here",
        }
    }

    #[test]
    fn cursor_sits_after_text_inside_border() {
        let buffer = TextBuffer::with_content("ab\ncd");
        let area = Rect::new(10, 5, 20, 6);
        assert_eq!(
            editor(&buffer, true).cursor_position(area),
            Some(Position::new(13, 7))
        );
        assert_eq!(editor(&buffer, false).cursor_position(area), None);
    }

    #[test]
    fn cursor_stays_visible_when_text_overflows() {
        let text: String = (0..10).map(|n| format!("{n}\n")).collect();
        let buffer = TextBuffer::with_content(text);
        // 3 inner rows; the cursor is on row 10 so it pins to the last row.
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(
            editor(&buffer, true).cursor_position(area),
            Some(Position::new(1, 3))
        );
    }

    #[test]
    fn unfocused_empty_buffer_shows_placeholder() {
        let buffer = TextBuffer::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        editor(&buffer, false).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Paste here"));
    }
}
