//! # Todo Items
//!
//! A `TodoItem` is a title plus a completion flag. Items are identified by
//! `ItemId`, never by title: two items titled "Buy milk" are two different items.

use std::fmt;

/// Stable identifier for an item, handed out by `ItemListStore::append`.
///
/// Ids are unique for the lifetime of the store that issued them and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    title: String,
    completed: bool,
}

impl TodoItem {
    /// Create an open item. Any title is accepted, including an empty one;
    /// rejecting blank submissions is the controller's call.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_completed(title, false)
    }

    pub fn with_completed(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_open() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.completed());
    }

    #[test]
    fn test_empty_title_is_allowed() {
        let item = TodoItem::new("");
        assert_eq!(item.title(), "");
    }

    #[test]
    fn test_toggle_flips_completion() {
        let mut item = TodoItem::new("Walk dog");
        item.toggle();
        assert!(item.completed());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        for initial in [false, true] {
            let mut item = TodoItem::with_completed("x", initial);
            item.toggle();
            item.toggle();
            assert_eq!(item.completed(), initial);
        }
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(7).to_string(), "#7");
    }
}
