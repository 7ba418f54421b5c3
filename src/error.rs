//! Top-level error type for running the application.
//!
//! Store lookups that fail and rows that disagree with the store both mean the
//! display and the data have drifted apart. Neither is recoverable: the run loop
//! stops and the error is reported on exit.

use std::fmt;
use std::io;

use crate::core::config::ConfigError;
use crate::core::item::ItemId;
use crate::core::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Config(ConfigError),
    Store(StoreError),
    /// No row is showing an item the store still holds.
    MissingRow(ItemId),
    /// Rows and store differ in length or order after an operation.
    OutOfSync { rows: usize, items: usize },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "terminal I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Store(e) => write!(f, "store error: {e}"),
            AppError::MissingRow(id) => write!(f, "no row displayed for item {id}"),
            AppError::OutOfSync { rows, items } => write!(
                f,
                "display out of sync with store ({rows} rows, {items} items)"
            ),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Store(e) => Some(e),
            AppError::MissingRow(_) | AppError::OutOfSync { .. } => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}
