//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::item::TodoItem;
use crate::core::state::App;
use crate::core::store::ItemListStore;

/// An `App` with an empty list and default policy.
pub fn test_app() -> App {
    App::new(ItemListStore::new())
}

/// An `App` seeded with `(title, completed)` pairs, in order.
pub fn app_with(items: &[(&str, bool)]) -> App {
    App::new(ItemListStore::from_items(
        items
            .iter()
            .map(|(title, completed)| TodoItem::with_completed(*title, *completed)),
    ))
}
