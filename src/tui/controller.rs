//! # Controller
//!
//! Connects the presenters to the core.
//!
//! ```text
//! TuiEvent ─▶ InputBox / ItemListState ─▶ InputEvent / RowEvent
//!                                              │
//!                                              ▼
//!                                   Action ─▶ update(&mut App) ─▶ Effect
//!                                                                  │
//!            InputBox::clear / ItemListState::{insert_at_end, ◀────┘
//!            remove_at} / ItemRow::refresh
//! ```
//!
//! Each event is handled to completion before the next one is read, so
//! store and rows only need to agree once `dispatch` returns. That agreement
//! is checked after every mutation.

use log::{debug, error};

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::core::store::StoreError;
use crate::error::AppError;
use crate::tui::component::EventHandler;
use crate::tui::components::InputEvent;
use crate::tui::components::item_row::RowEvent;
use crate::tui::event::TuiEvent;
use crate::tui::{InputMode, TuiState};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Route one terminal event through the focused presenter and into the core.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Result<Flow, AppError> {
    match event {
        TuiEvent::Quit => return dispatch(app, tui, Action::Quit),
        TuiEvent::Resize => return Ok(Flow::Continue),
        TuiEvent::MouseClick(column, row) => {
            if let Some(row_event) = tui.item_list.click(*column, *row) {
                tui.input_mode = InputMode::List;
                return dispatch_row_event(app, tui, row_event);
            }
            if tui.input_area.contains((*column, *row).into()) {
                tui.input_mode = InputMode::Input;
            }
            return Ok(Flow::Continue);
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.item_list.handle_event(event);
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    match tui.input_mode {
        InputMode::Input => match event {
            TuiEvent::FocusNext | TuiEvent::FocusPrev | TuiEvent::CursorDown => {
                tui.input_mode = InputMode::List;
                tui.item_list.ensure_selection();
                Ok(Flow::Continue)
            }
            _ => match tui.input_box.handle_event(event) {
                Some(InputEvent::Submit(text)) => dispatch(app, tui, Action::Submit(text)),
                Some(InputEvent::ContentChanged) | None => Ok(Flow::Continue),
            },
        },
        InputMode::List => match event {
            TuiEvent::FocusNext
            | TuiEvent::FocusPrev
            | TuiEvent::Escape
            | TuiEvent::InputChar('i') => {
                tui.input_mode = InputMode::Input;
                Ok(Flow::Continue)
            }
            _ => match tui.item_list.handle_event(event) {
                Some(row_event) => dispatch_row_event(app, tui, row_event),
                None => Ok(Flow::Continue),
            },
        },
    }
}

fn dispatch_row_event(app: &mut App, tui: &mut TuiState, event: RowEvent) -> Result<Flow, AppError> {
    let action = match event {
        RowEvent::ToggleRequested { id, value } => Action::ToggleRequested { id, value },
        RowEvent::DeleteRequested(id) => Action::DeleteRequested(id),
    };
    dispatch(app, tui, action)
}

/// Run `action` through `update` and mirror the resulting effect into the presenters.
pub fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Result<Flow, AppError> {
    let effect = update(app, action).inspect_err(|e| error!("Store rejected action: {}", e))?;
    debug!("Effect: {:?}", effect);

    match effect {
        Effect::Ignored => return Ok(Flow::Continue),
        Effect::Quit => return Ok(Flow::Quit),
        Effect::ItemAdded(id) => {
            let item = app.store.get(id).ok_or(StoreError::NotFound(id))?;
            tui.item_list.insert_at_end(id, item);
            tui.input_box.clear();
        }
        Effect::ItemToggled(id) => {
            let item = app.store.get(id).ok_or(StoreError::NotFound(id))?;
            let row = tui.item_list.row_mut(id).ok_or(AppError::MissingRow(id))?;
            row.refresh(item);
        }
        Effect::ItemRemoved { id, index } => {
            let removed = tui.item_list.remove_at(index);
            if removed.as_ref().map(|row| row.id()) != Some(id) {
                return Err(out_of_sync(app, tui));
            }
        }
    }

    if !tui.item_list.is_in_sync_with(&app.store) {
        return Err(out_of_sync(app, tui));
    }
    Ok(Flow::Continue)
}

fn out_of_sync(app: &App, tui: &TuiState) -> AppError {
    let err = AppError::OutOfSync {
        rows: tui.item_list.len(),
        items: app.store.len(),
    };
    error!("{}", err);
    err
}
