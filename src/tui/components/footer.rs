//! Key-binding hints along the bottom edge. Content depends on which pane has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Footer {
    /// Whether the list (rather than the input) has focus
    pub list_focused: bool,
}

impl Footer {
    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        if self.list_focused {
            &[
                ("↑↓", "Select"),
                ("Space", "Toggle"),
                ("d", "Delete"),
                ("Tab", "Input"),
                ("^Q", "Exit"),
            ]
        } else {
            &[("Enter", "Add"), ("Tab", "List"), ("^Q", "Exit")]
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::Gray);

        let spans: Vec<Span> = self
            .bindings()
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), key_style),
                    Span::styled(format!(" {label}  "), label_style),
                ]
            })
            .collect();
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_follow_focus() {
        let input = Footer { list_focused: false };
        assert!(input.bindings().iter().any(|(_, label)| *label == "Add"));

        let list = Footer { list_focused: true };
        assert!(list.bindings().iter().any(|(_, label)| *label == "Toggle"));
        assert!(list.bindings().iter().all(|(_, label)| *label != "Add"));
    }
}
