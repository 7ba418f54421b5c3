use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Footer, ItemList, TitleBar};
use crate::tui::{InputMode, TuiState};

/// Screen regions, top to bottom.
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, input, list, footer] =
        Layout::vertical([Length(1), Length(3), Min(0), Length(1)]).areas(area);
    ScreenLayout {
        title,
        input,
        list,
        footer,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = screen_layout(frame.area());
    let list_focused = tui.input_mode == InputMode::List;

    TitleBar::new(
        app.store.len(),
        app.store.completed_count(),
        app.status_message.clone(),
    )
    .render(frame, layout.title);

    tui.input_area = layout.input;
    tui.input_box.render(frame, layout.input);

    ItemList::new(&mut tui.item_list, list_focused).render(frame, layout.list);

    Footer { list_focused }.render(frame, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::app_with;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_screen_layout_regions() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.input, Rect::new(0, 1, 80, 3));
        assert_eq!(layout.list, Rect::new(0, 4, 80, 19));
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_draw_ui() {
        let app = app_with(&[("Item 1", false), ("Item 2", true), ("Item 3", false)]);
        let mut tui = TuiState::new(&app.store);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("1/3 done"));
        assert!(text.contains("What needs to be done?"));
        assert!(text.contains("[ ] Item 1"));
        assert!(text.contains("[x] Item 2"));
        assert!(text.contains("[ ] Item 3"));
        assert_eq!(tui.input_area, Rect::new(0, 1, 80, 3));
    }
}
