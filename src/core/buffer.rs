//! Multi-line text buffer backing the two diff inputs.
//!
//! The cursor is a char index into the whole buffer (never a byte index),
//! so every edit stays on a UTF-8 boundary.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// Create with initial content, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let mut buf = Self::default();
        buf.set_content(content);
        buf
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.text = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    // ── editing ─────────────────────────────────────────────────

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert('\n');
    }

    /// Insert a pasted block.  `\r\n` and lone `\r` become `\n`.
    pub fn insert_str(&mut self, s: &str) {
        let normalised = s.replace("\r\n", "\n").replace('\r', "\n");
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &normalised);
        self.cursor += normalised.chars().count();
    }

    /// Delete the char before the cursor.  Joins lines at a line start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    // ── navigation ──────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let (row, _) = self.cursor_row_col();
        self.cursor = self.line_spans()[row].0;
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let (row, _) = self.cursor_row_col();
        let (start, len) = self.line_spans()[row];
        self.cursor = start + len;
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row == 0 {
            self.cursor = 0;
            return;
        }
        let (start, len) = self.line_spans()[row - 1];
        self.cursor = start + col.min(len);
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor_row_col();
        let spans = self.line_spans();
        match spans.get(row + 1) {
            Some(&(start, len)) => self.cursor = start + col.min(len),
            None => self.cursor = self.char_count(),
        }
    }

    // ── geometry ────────────────────────────────────────────────

    /// `(start_char, len_chars)` of every line.  Always at least one entry;
    /// a trailing `\n` opens an empty last line.
    fn line_spans(&self) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start = 0;
        for line in self.text.split('\n') {
            let len = line.chars().count();
            spans.push((start, len));
            start += len + 1;
        }
        spans
    }

    /// Row and column (in chars) of the cursor.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let before: String = self.text.chars().take(self.cursor).collect();
        let row = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count());
        (row, col)
    }

    /// Display width of the text between line start and cursor.
    pub fn cursor_display_col(&self) -> usize {
        let before: String = self.text.chars().take(self.cursor).collect();
        let tail = before.rsplit('\n').next().unwrap_or("");
        UnicodeWidthStr::width(tail)
    }

    /// Number of editor rows (a trailing newline counts as an empty row).
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}
