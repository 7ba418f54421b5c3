//! # Actions
//!
//! Everything the user can do to the list becomes an `Action`.
//! User presses Enter in the input? That's `Action::Submit(text)`.
//! User ticks a checkbox? That's `Action::ToggleRequested { id, value }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the store, and returns an `Effect` describing what the presentation layer
//! has to mirror. No rendering happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect  →  presenters
//! ```

use log::{debug, info};

use crate::core::item::{ItemId, TodoItem};
use crate::core::state::App;
use crate::core::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text submitted from the input field.
    Submit(String),
    /// A row's checkbox was interacted with. `value` is what the checkbox
    /// reported; the item's own flag decides the outcome.
    ToggleRequested { id: ItemId, value: bool },
    /// A row's delete button was activated.
    DeleteRequested(ItemId),
    Quit,
}

/// What the presentation layer must do after an `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed (e.g. blank submission).
    Ignored,
    /// Append a row for this item and clear the input field.
    ItemAdded(ItemId),
    /// Refresh the row showing this item.
    ItemToggled(ItemId),
    /// Remove the row at `index`. The index was resolved before the store removal.
    ItemRemoved { id: ItemId, index: usize },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Result<Effect, StoreError> {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => {
            if app.reject_blank_titles && text.trim().is_empty() {
                debug!("Ignoring blank submission");
                return Ok(Effect::Ignored);
            }
            app.status_message = format!("Added \"{}\"", text.trim());
            let id = app.store.append(TodoItem::new(text));
            info!("Added item {} ({} total)", id, app.store.len());
            Ok(Effect::ItemAdded(id))
        }
        Action::ToggleRequested { id, value } => {
            let item = app.store.get_mut(id).ok_or(StoreError::NotFound(id))?;
            item.toggle();
            if item.completed() != value {
                debug!(
                    "Checkbox for {} reported {}, item is now {}",
                    id,
                    value,
                    item.completed()
                );
            }
            app.status_message = if item.completed() {
                format!("Completed \"{}\"", item.title())
            } else {
                format!("Reopened \"{}\"", item.title())
            };
            Ok(Effect::ItemToggled(id))
        }
        Action::DeleteRequested(id) => {
            // Resolve the index first: it can't be looked up once the item is gone.
            let index = app.store.index_of(id)?;
            let item = app.store.remove(id)?;
            info!("Deleted item {} at index {}", id, index);
            app.status_message = format!("Deleted \"{}\"", item.title());
            Ok(Effect::ItemRemoved { id, index })
        }
        Action::Quit => Ok(Effect::Quit),
    }
}
