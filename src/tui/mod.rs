//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core `Action`s via the
//! controller.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize).

pub mod component;
pub mod components;
pub mod controller;
pub mod event;
pub mod ui;

use log::{error, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store::ItemListStore;
use crate::error::AppError;
use crate::tui::components::{InputBox, ItemListState};
use crate::tui::controller::Flow;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(500);

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing goes to the input box. Tab/Down moves to the list.
    Input,
    /// Keys select and act on rows. Tab/Esc returns to the input.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub item_list: ItemListState,
    pub input_box: InputBox,
    // Modal input mode
    pub input_mode: InputMode,
    /// Input box area from the last frame, for click-to-focus
    pub input_area: Rect,
}

impl TuiState {
    /// Build presentation state for `store`. Rows come from a snapshot, so the
    /// list never shares a container with the store.
    pub fn new(store: &ItemListStore) -> Self {
        Self {
            item_list: ItemListState::from_snapshot(store.snapshot()),
            input_box: InputBox::new(),
            input_mode: InputMode::Input, // User expects to type immediately
            input_area: Rect::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: &ResolvedConfig) -> Result<(), AppError> {
    let mut app = App::from_config(config);
    let mut tui = TuiState::new(&app.store);
    info!("Starting with {} items", app.store.len());

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new()
        .map_err(AppError::from)
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));

    ratatui::restore();
    if let Err(ref e) = result {
        error!("Event loop stopped: {}", e);
    }
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> Result<(), AppError> {
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with TUI state
        tui.input_box.focused = tui.input_mode == InputMode::Input;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL_TIMEOUT)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if controller::handle_event(app, tui, &event)? == Flow::Quit {
                info!("Exit requested");
                return Ok(());
            }
            tui.input_box.focused = tui.input_mode == InputMode::Input;
            pending = poll_event_immediate()?;
        }
    }
}
