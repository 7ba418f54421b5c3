//! # Item Store
//!
//! The authoritative, ordered collection of todo items.
//!
//! ```text
//! ItemListStore
//! ├── entries: Vec<(ItemId, TodoItem)>   // display order = insertion order
//! └── next_id: u64                       // never reused
//! ```
//!
//! Every lookup goes through `ItemId`. Titles may repeat, so matching by value
//! would pick the wrong item.

use std::fmt;

use crate::core::item::{ItemId, TodoItem};

/// Raised when an operation references an item that is not in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(ItemId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "item {id} not found in store"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Default)]
pub struct ItemListStore {
    entries: Vec<(ItemId, TodoItem)>,
    next_id: u64,
}

impl ItemListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from items in order, assigning fresh ids.
    pub fn from_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.append(item);
        }
        store
    }

    /// Add an item to the end of the list and return its id.
    pub fn append(&mut self, item: TodoItem) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, item));
        id
    }

    pub fn index_of(&self, id: ItemId) -> Result<usize, StoreError> {
        self.entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Remove the item with the given id, returning it.
    pub fn remove(&mut self, id: ItemId) -> Result<TodoItem, StoreError> {
        let index = self.index_of(id)?;
        let (_, item) = self.entries.remove(index);
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, item)| item)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut TodoItem> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, item)| item)
    }

    /// Independent copy of the current sequence.
    ///
    /// The display is initialized from this so that nothing it does to its own
    /// container can reach back into the store.
    pub fn snapshot(&self) -> Vec<(ItemId, TodoItem)> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &TodoItem)> {
        self.entries.iter().map(|(id, item)| (*id, item))
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn last(&self) -> Option<(ItemId, &TodoItem)> {
        self.entries.last().map(|(id, item)| (*id, item))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|(_, item)| item.completed()).count()
    }
}
