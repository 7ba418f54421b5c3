//! # Core Application Logic
//!
//! This module contains the todo list's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Item / Store (data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No rendering.          │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `TodoItem` and its `ItemId`
//! - [`store`]: `ItemListStore`, the ordered, id-keyed item arena
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Settings file, env and CLI resolution

pub mod action;
pub mod config;
pub mod item;
pub mod state;
pub mod store;
