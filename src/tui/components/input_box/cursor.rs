//! Cursor position tracking for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll offset.
//! All navigation methods accept `buffer: &str` explicitly; the text data is
//! owned by `InputBox`, keeping the dependency visible.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Border (2) + padding (1 on the right for the cursor cell)
pub(super) const HORIZONTAL_OVERHEAD: u16 = 3;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns hidden off the left edge when the text is wider than the box
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Reset cursor to start (used when the input is cleared).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    pub fn move_left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[..self.pos].width() as u16
    }

    /// Update scroll offset to keep the cursor inside a box `area_width` wide.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let visible = inner_width(area_width);
        let column = self.column(buffer);

        if visible == 0 {
            self.scroll_offset = column;
        } else if column < self.scroll_offset {
            self.scroll_offset = column;
        } else if column >= self.scroll_offset + visible {
            self.scroll_offset = column + 1 - visible;
        }
    }

    /// Screen position of the cursor for a box drawn at `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let column = self.column(buffer).saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + column,
            area.y + BORDER_OFFSET,
        )
    }
}

/// Columns available for text inside the bordered box.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_char_boundary_ascii() {
        assert_eq!(prev_char_boundary("hello", 3), 2);
    }

    #[test]
    fn prev_char_boundary_multibyte() {
        // 'é' is 2 bytes
        assert_eq!(prev_char_boundary("café", 5), 3);
    }

    #[test]
    fn next_char_boundary_at_end() {
        assert_eq!(next_char_boundary("abc", 3), 3);
    }

    #[test]
    fn next_char_boundary_emoji() {
        // '🥛' is 4 bytes
        assert_eq!(next_char_boundary("🥛x", 0), 4);
    }

    #[test]
    fn scroll_follows_cursor_past_right_edge() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();

        // 8 wide box → 5 visible columns; cursor sits at column 10
        cursor.update_scroll_offset(buffer, 8);
        assert_eq!(cursor.scroll_offset, 6);

        cursor.pos = 2;
        cursor.update_scroll_offset(buffer, 8);
        assert_eq!(cursor.scroll_offset, 2);
    }

    #[test]
    fn screen_pos_accounts_for_border_and_scroll() {
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        let area = Rect::new(10, 5, 40, 3);
        assert_eq!(cursor.screen_pos("abc", area), (14, 6));

        cursor.scroll_offset = 2;
        assert_eq!(cursor.screen_pos("abc", area), (12, 6));
    }
}
