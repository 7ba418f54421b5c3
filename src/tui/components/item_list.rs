//! # ItemList Component
//!
//! Scrollable view of the todo rows.
//!
//! ## Responsibilities
//!
//! - Own the ordered set of `ItemRow`s and mirror store inserts/removals into it
//! - Keyboard selection and scrolling
//! - Hit testing for mouse clicks
//! - Route key presses to the selected row
//!
//! ## Architecture
//!
//! `ItemList` is a transient component (created each frame) that wraps
//! `&'a mut ItemListState` (persistent state). The row vector in
//! `ItemListState` is built from a *snapshot* of the store and then kept in
//! step by the controller: `insert_at_end` after `append`, `remove_at` after
//! `remove`. The list never reads or writes the store on its own.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::item::{ItemId, TodoItem};
use crate::core::store::ItemListStore;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::item_row::{ItemRow, ItemRowView, RowEvent, RowHit};
use crate::tui::event::TuiEvent;

/// Rows and layout state for the item list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct ItemListState {
    rows: Vec<ItemRow>,
    /// Currently selected row (keyboard navigation or last click)
    selected: Option<usize>,
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached row heights from the last render
    heights: Vec<u16>,
    /// Running sum of `heights`; `prefix_heights[i]` is the bottom edge of row i
    prefix_heights: Vec<u16>,
    /// Item shown at each position in the last frame, parallel to `prefix_heights`
    rendered_ids: Vec<ItemId>,
    /// Vertical scroll offset the last frame was drawn with
    rendered_offset_y: u16,
    /// Inner area (inside the border) from the last render, for hit testing
    last_area: Rect,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the list from a store snapshot, one row per item, in order.
    pub fn from_snapshot(items: Vec<(ItemId, TodoItem)>) -> Self {
        let mut state = Self::new();
        state.initialize(items);
        state
    }

    pub fn initialize(&mut self, items: Vec<(ItemId, TodoItem)>) {
        self.rows = items
            .iter()
            .map(|(id, item)| ItemRow::new(*id, item))
            .collect();
        self.selected = None;
        self.heights.clear();
        self.prefix_heights.clear();
        self.rendered_ids.clear();
        self.rendered_offset_y = 0;
        self.scroll_state = ScrollViewState::default();
    }

    pub fn insert_at_end(&mut self, id: ItemId, item: &TodoItem) {
        self.rows.push(ItemRow::new(id, item));
    }

    /// Remove the row at `index`. Returns `None` if there is no such row.
    pub fn remove_at(&mut self, index: usize) -> Option<ItemRow> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(index);

        self.selected = match self.selected {
            _ if self.rows.is_empty() => None,
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) => Some(selected.min(self.rows.len() - 1)),
            None => None,
        };
        Some(row)
    }

    /// Find the row showing `id`.
    pub fn row_mut(&mut self, id: ItemId) -> Option<&mut ItemRow> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when rows and store have the same length and the same id at every position.
    pub fn is_in_sync_with(&self, store: &ItemListStore) -> bool {
        self.rows.len() == store.len()
            && self.rows.iter().map(ItemRow::id).eq(store.ids())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.rows.len());
    }

    /// Select the first row if nothing is selected yet.
    pub fn ensure_selection(&mut self) {
        if self.selected.is_none() && !self.rows.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.rows.len() - 1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.rows.len() - 1,
        });
        self.scroll_to_selected();
    }

    pub fn selected_row_mut(&mut self) -> Option<&mut ItemRow> {
        self.selected.and_then(|i| self.rows.get_mut(i))
    }

    /// Scroll the viewport so the selected row is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }

        let row_top = if idx == 0 { 0 } else { self.prefix_heights[idx - 1] };
        let row_bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;
        let viewport_height = self.last_area.height;

        if row_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: row_top });
        } else if row_bottom > offset_y + viewport_height {
            let new_y = row_bottom.saturating_sub(viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let total: u16 = self.heights.iter().sum();
        let max_y = total.saturating_sub(self.last_area.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Find the item and control under a screen position.
    ///
    /// Resolves against the items the last frame showed, not the current rows.
    /// Several clicks can be handled between two renders.
    pub fn hit_test(&self, column: u16, screen_y: u16) -> Option<(ItemId, RowHit)> {
        let area = self.last_area;
        if !area.contains(Position { x: column, y: screen_y }) {
            return None;
        }

        let content_y = (screen_y - area.y) + self.rendered_offset_y;
        let index = self
            .prefix_heights
            .iter()
            .position(|&bottom| content_y < bottom)?;
        let row_top = if index == 0 { 0 } else { self.prefix_heights[index - 1] };

        // The last column is the scrollbar
        let content_width = area.width.saturating_sub(1);
        let hit = ItemRow::hit(column - area.x, content_y - row_top, content_width)?;
        let id = self.rendered_ids.get(index).copied()?;
        Some((id, hit))
    }

    /// Handle a left click: select the row under the cursor and return its intent event.
    ///
    /// A click on an item that has been removed since the last frame is dropped.
    pub fn click(&mut self, column: u16, screen_y: u16) -> Option<RowEvent> {
        let (id, hit) = self.hit_test(column, screen_y)?;
        let index = self.rows.iter().position(|row| row.id() == id)?;
        self.selected = Some(index);
        Some(self.rows[index].click(hit))
    }

    fn rebuild_layout(&mut self, content_width: u16) {
        self.rendered_ids = self.rows.iter().map(ItemRow::id).collect();
        self.heights = self
            .rows
            .iter()
            .map(|row| row.calculate_height(content_width))
            .collect();
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }
}

impl EventHandler for ItemListState {
    type Event = RowEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.select_prev();
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.select_next();
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::MouseClick(column, row) => self.click(*column, *row),
            _ => self.selected_row_mut()?.handle_event(event),
        }
    }
}

/// Scrollable list component.
/// Created fresh each frame with a reference to the persistent state.
pub struct ItemList<'a> {
    pub state: &'a mut ItemListState,
    /// Whether keyboard focus is on the list (vs. the input box)
    pub is_focused: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a mut ItemListState, is_focused: bool) -> Self {
        Self { state, is_focused }
    }
}

impl<'a> Component for ItemList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Items ({}) ", self.state.rows.len()));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.state.last_area = inner;

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar safe area
        self.state.rebuild_layout(content_width);
        self.state.clamp_scroll();
        self.state.rendered_offset_y = self.state.scroll_state.offset().y;

        if self.state.rows.is_empty() {
            let empty = Paragraph::new("Nothing to do. Type above and press Enter.")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            frame.render_widget(empty, inner);
            return;
        }

        let total_height: u16 = self.state.heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, row) in self.state.rows.iter().enumerate() {
            let height = self.state.heights[i];
            let view = ItemRowView {
                row,
                is_selected: self.state.selected == Some(i),
                is_focused: self.is_focused,
            };
            scroll_view.render_widget(view, Rect::new(0, y_offset, content_width, height));
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
