//! # TitleBar Component
//!
//! Top status bar showing list counts and the latest status message.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has no
//! internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(3, 1, "Added \"Buy milk\"".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"todo · 1/3 done | Added "Buy milk""`
//! 2. **Default**: `"todo · 1/3 done"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Number of items in the list
    pub total: usize,
    /// Number of completed items
    pub completed: usize,
    /// Status message (e.g., "Deleted "Item 2"")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(total: usize, completed: usize, status_message: String) -> Self {
        Self {
            total,
            completed,
            status_message,
        }
    }

    fn counts(&self) -> String {
        format!("{}/{} done", self.completed, self.total)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("todo", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" · "),
            Span::raw(self.counts()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_shows_counts_and_status() {
        let mut bar = TitleBar::new(3, 1, "Added \"Buy milk\"".to_string());
        let text = rendered(&mut bar);
        assert!(text.starts_with("todo · 1/3 done | Added \"Buy milk\""));
    }

    #[test]
    fn test_empty_status_has_no_separator() {
        let mut bar = TitleBar::new(0, 0, String::new());
        let text = rendered(&mut bar);
        assert!(text.starts_with("todo · 0/0 done"));
        assert!(!text.contains('|'));
    }
}
