//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid search template (missing placeholder): {0}")]
    InvalidTemplate(String),

    #[error("Delimiter must not be empty: {0}")]
    EmptyDelimiter(&'static str),

    #[error("Invalid shortcut prefix: {0:?}")]
    InvalidShortcut(String),
}
