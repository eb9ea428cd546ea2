//! Registry error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Command has an empty id")]
    EmptyId,

    #[error("Duplicate command id: {0}")]
    DuplicateId(String),

    #[error("Alias '{alias}' of '{command}' is already taken by '{existing}'")]
    AliasCollision {
        alias: String,
        command: String,
        existing: String,
    },

    #[error("Invalid URL for command '{command}': {url}")]
    InvalidUrl { command: String, url: String },

    #[error("Search template for command '{0}' has no placeholder")]
    MissingPlaceholder(String),

    #[error("Command '{command}' references unknown category '{category}'")]
    UnknownCategory { command: String, category: String },

    #[error("Duplicate category key: {0}")]
    DuplicateCategory(String),

    #[error("Invalid board entry: {0}")]
    InvalidBoard(String),

    #[error("Registry parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
