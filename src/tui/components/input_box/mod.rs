//! # InputBox Component
//!
//! Single-line text entry for new todo titles.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit `Submit` on Enter
//! - Show a placeholder while empty
//!
//! ## State Management
//!
//! The buffer is internal state. Submitting does *not* clear it: the controller
//! decides whether the text became an item and calls `clear()` if it did.
//! `focused` is a prop from the TUI state.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, inner_width, next_char_boundary, prev_char_boundary};

pub const PLACEHOLDER: &str = "What needs to be done?";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

/// Text input component.
///
/// # Props
///
/// - `focused`: Whether keyboard focus is on the input (from TUI state)
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position and horizontal scroll (see `CursorState`)
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Focus flag (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Empty the field and put the cursor back at the start.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }

    /// Text visible in a box `area_width` wide, starting at the scroll offset.
    fn visible_text(&self, area_width: u16) -> String {
        let width = inner_width(area_width) as usize;
        let mut skipped = 0usize;
        let mut taken = 0usize;
        let mut visible = String::new();

        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if skipped < self.cursor.scroll_offset as usize {
                skipped += w;
                continue;
            }
            if taken + w > width {
                break;
            }
            taken += w;
            visible.push(c);
        }
        visible
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" New item ");

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.visible_text(area.width)).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(input.block(block), area);

        if self.focused {
            let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Titles are single-line
                let flattened = text.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => self
                .cursor
                .move_left(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorRight => self
                .cursor
                .move_right(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
