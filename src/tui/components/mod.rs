//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing counts and status
//! - `Footer`: Key-binding hints
//! - `ItemRowView`: One row, created per frame by `ItemList`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Text input for new items, emits `InputEvent::Submit`
//! - `ItemListState` / `ItemRow`: The rows, emitting `RowEvent`s
//!
//! ## Design Philosophy
//!
//! ### Intent, Not Mutation
//!
//! Components never change the item store. They report what the user asked
//! for (`Submit`, `ToggleRequested`, `DeleteRequested`) and the controller
//! decides what happens, then tells the components what to show.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains its state types, event types, rendering,
//! event handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── footer.rs        (Key hints)
//! ├── item_row.rs      (Single row: checkbox + delete button)
//! ├── item_list.rs     (Scrollable row container)
//! └── input_box/       (Single-line text input)
//! ```

mod footer;
mod title_bar;
pub use footer::Footer;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod item_list;
pub use item_list::{ItemList, ItemListState};
pub mod item_row;
pub use item_row::{ItemRow, RowEvent};
