//! # ItemRow Component
//!
//! Interactive view of a single todo item: a checkbox with the title and a
//! delete button on the right.
//!
//! ```text
//!  [x] Buy milk                              ⌫ Delete
//! ```
//!
//! ## Responsibilities
//!
//! - Display the item's title and completion state
//! - Translate key presses and clicks into `RowEvent`s
//! - Re-read the item when the controller asks for it (`refresh`)
//!
//! ## State Ownership
//!
//! The row keeps the `ItemId` of its item plus a display copy of the title and
//! checkbox value. The store owns the item itself. Emitting `ToggleRequested`
//! does not change `checked`: the checkbox only moves when the controller calls
//! `refresh` after toggling the item, so the row can never drift from the store.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::item::{ItemId, TodoItem};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Label drawn inside the delete button.
pub const DELETE_LABEL: &str = "⌫ Delete";
/// Columns taken by `"[x] "` before the title.
const CHECKBOX_WIDTH: u16 = 4;
/// Gap between the title and the delete button.
const BUTTON_GAP: u16 = 1;

/// Intent events emitted by a row. The row never applies them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// The checkbox was interacted with; `value` is the state it would flip to.
    ToggleRequested { id: ItemId, value: bool },
    DeleteRequested(ItemId),
}

/// Which control inside a row a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Checkbox,
    DeleteButton,
}

#[derive(Debug, Clone)]
pub struct ItemRow {
    id: ItemId,
    title: String,
    checked: bool,
}

impl ItemRow {
    pub fn new(id: ItemId, item: &TodoItem) -> Self {
        Self {
            id,
            title: item.title().to_string(),
            checked: item.completed(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The value the checkbox currently displays.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Re-read the completion flag from the item backing this row.
    pub fn refresh(&mut self, item: &TodoItem) {
        self.checked = item.completed();
    }

    pub fn toggle_request(&self) -> RowEvent {
        RowEvent::ToggleRequested {
            id: self.id,
            value: !self.checked,
        }
    }

    pub fn delete_request(&self) -> RowEvent {
        RowEvent::DeleteRequested(self.id)
    }

    /// Turn a click on `hit` into the matching intent event.
    pub fn click(&self, hit: RowHit) -> RowEvent {
        match hit {
            RowHit::Checkbox => self.toggle_request(),
            RowHit::DeleteButton => self.delete_request(),
        }
    }

    /// Which control sits at `column` on `line` of a row `width` wide.
    ///
    /// Both are relative to the row's top-left corner. The button is only drawn
    /// on the first line, so the cells below it hit nothing.
    pub fn hit(column: u16, line: u16, width: u16) -> Option<RowHit> {
        if column >= width {
            return None;
        }
        match width.checked_sub(button_width()) {
            Some(button_start) if column >= button_start => {
                (line == 0).then_some(RowHit::DeleteButton)
            }
            _ => Some(RowHit::Checkbox),
        }
    }

    /// Rendered height for a given row width.
    ///
    /// Mirrors the `Paragraph` wrapping used in `render` so the list can lay
    /// rows out without rendering them first.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let title_width = title_width(width);
        if title_width == 0 || self.title.trim().is_empty() {
            return 1;
        }

        let options = textwrap::Options::new(title_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        (textwrap::wrap(self.title.trim(), options).len() as u16).max(1)
    }
}

impl EventHandler for ItemRow {
    type Event = RowEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(' ') => Some(self.toggle_request()),
            TuiEvent::InputChar('d') | TuiEvent::Delete => Some(self.delete_request()),
            _ => None,
        }
    }
}

fn button_width() -> u16 {
    DELETE_LABEL.width() as u16 + 2
}

fn title_width(width: u16) -> u16 {
    width.saturating_sub(CHECKBOX_WIDTH + BUTTON_GAP + button_width())
}

/// Transient render wrapper, created per frame by `ItemList`.
#[derive(Clone, Copy)]
pub struct ItemRowView<'a> {
    pub row: &'a ItemRow,
    pub is_selected: bool,
    pub is_focused: bool,
}

impl<'a> Widget for ItemRowView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base = if self.is_selected && self.is_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        buf.set_style(area, base);

        let checkbox = if self.row.checked { "[x] " } else { "[ ] " };
        let checkbox_style = if self.row.checked {
            base.fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            base.fg(Color::Gray)
        };
        let title_style = if self.row.checked {
            base.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            base.fg(Color::White)
        };

        let checkbox_area = Rect {
            width: CHECKBOX_WIDTH.min(area.width),
            height: 1,
            ..area
        };
        Span::styled(checkbox, checkbox_style).render(checkbox_area, buf);

        let title_area = Rect {
            x: area.x + CHECKBOX_WIDTH.min(area.width),
            y: area.y,
            width: title_width(area.width),
            height: area.height,
        };
        if title_area.width > 0 {
            Paragraph::new(self.row.title.trim())
                .style(title_style)
                .wrap(Wrap { trim: true })
                .render(title_area, buf);
        }

        let button_width = button_width();
        if area.width >= button_width {
            let button = Span::styled(
                format!(" {DELETE_LABEL} "),
                base.fg(Color::Black).bg(Color::Yellow),
            );
            let button_area = Rect {
                x: area.x + area.width - button_width,
                width: button_width,
                height: 1,
                ..area
            };
            button.render(button_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ItemListStore;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn row_for(title: &str, completed: bool) -> ItemRow {
        let mut store = ItemListStore::new();
        let item = TodoItem::with_completed(title, completed);
        let id = store.append(item.clone());
        ItemRow::new(id, &item)
    }

    fn render_to_text(row: &ItemRow, width: u16) -> String {
        let height = row.calculate_height(width);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let view = ItemRowView {
                    row,
                    is_selected: false,
                    is_focused: false,
                };
                f.render_widget(view, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_row_mirrors_item() {
        let row = row_for("Walk dog", true);
        assert_eq!(row.title(), "Walk dog");
        assert!(row.is_checked());
    }

    #[test]
    fn test_toggle_request_does_not_change_checkbox() {
        let mut row = row_for("Walk dog", false);
        let event = row.handle_event(&TuiEvent::InputChar(' '));

        assert_eq!(
            event,
            Some(RowEvent::ToggleRequested {
                id: row.id(),
                value: true
            })
        );
        assert!(!row.is_checked(), "checkbox waits for refresh()");
    }

    #[test]
    fn test_refresh_reads_item_state() {
        let mut row = row_for("Walk dog", false);
        row.refresh(&TodoItem::with_completed("Walk dog", true));
        assert!(row.is_checked());
    }

    #[test]
    fn test_delete_keys() {
        let mut row = row_for("a", false);
        let expected = Some(RowEvent::DeleteRequested(row.id()));
        assert_eq!(row.handle_event(&TuiEvent::InputChar('d')), expected);
        assert_eq!(row.handle_event(&TuiEvent::Delete), expected);
        assert_eq!(row.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_hit_regions() {
        assert_eq!(ItemRow::hit(0, 0, 40), Some(RowHit::Checkbox));
        assert_eq!(ItemRow::hit(20, 0, 40), Some(RowHit::Checkbox));
        assert_eq!(ItemRow::hit(39, 0, 40), Some(RowHit::DeleteButton));
        assert_eq!(
            ItemRow::hit(40 - button_width(), 0, 40),
            Some(RowHit::DeleteButton)
        );
        assert_eq!(ItemRow::hit(40 - button_width() - 1, 0, 40), Some(RowHit::Checkbox));
    }

    #[test]
    fn test_hit_outside_row_width_is_nothing() {
        assert_eq!(ItemRow::hit(40, 0, 40), None);
        assert_eq!(ItemRow::hit(55, 0, 40), None);
    }

    #[test]
    fn test_button_only_hits_on_first_line() {
        // Second and third lines of a wrapped row: title area still toggles,
        // the blank cells under the button do nothing.
        assert_eq!(ItemRow::hit(39, 1, 40), None);
        assert_eq!(ItemRow::hit(40 - button_width(), 2, 40), None);
        assert_eq!(ItemRow::hit(10, 2, 40), Some(RowHit::Checkbox));
    }

    #[test]
    fn test_narrow_row_without_button_only_toggles() {
        let narrow = button_width() - 1;
        assert_eq!(ItemRow::hit(narrow - 1, 0, narrow), Some(RowHit::Checkbox));
    }

    #[test]
    fn test_enter_does_not_toggle_row() {
        let mut row = row_for("a", false);
        assert_eq!(row.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_click_maps_to_events() {
        let row = row_for("a", true);
        assert_eq!(
            row.click(RowHit::Checkbox),
            RowEvent::ToggleRequested {
                id: row.id(),
                value: false
            }
        );
        assert_eq!(
            row.click(RowHit::DeleteButton),
            RowEvent::DeleteRequested(row.id())
        );
    }

    #[test]
    fn test_long_title_wraps() {
        let row = row_for("one two three four five six seven eight nine ten", false);
        assert_eq!(row.calculate_height(80), 1);
        assert!(row.calculate_height(30) > 1);
    }

    #[test]
    fn test_render_shows_checkbox_and_button() {
        let text = render_to_text(&row_for("Buy milk", true), 40);
        assert!(text.starts_with("[x] Buy milk"));
        assert!(text.contains("Delete"));

        let text = render_to_text(&row_for("Buy milk", false), 40);
        assert!(text.starts_with("[ ] Buy milk"));
    }
}
