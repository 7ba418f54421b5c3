//! # Application State
//!
//! Core business state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: ItemListStore        // the todo items, in display order
//! ├── status_message: String      // status bar text
//! └── reject_blank_titles: bool   // validation policy for Submit
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `App` is built once at startup and handed to the controller; there is no
//! global instance.

use crate::core::config::ResolvedConfig;
use crate::core::item::TodoItem;
use crate::core::store::ItemListStore;

pub struct App {
    pub store: ItemListStore,
    pub status_message: String,
    pub reject_blank_titles: bool,
}

impl App {
    pub fn new(store: ItemListStore) -> Self {
        Self {
            store,
            status_message: String::from("Welcome to todo!"),
            reject_blank_titles: true,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let store = if config.seed_demo_items {
            ItemListStore::from_items(demo_items())
        } else {
            ItemListStore::new()
        };
        Self {
            reject_blank_titles: config.reject_blank_titles,
            ..Self::new(store)
        }
    }
}

/// Items shown on a fresh start.
pub fn demo_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new("Item 1"),
        TodoItem::with_completed("Item 2", true),
        TodoItem::new("Item 3"),
    ]
}
