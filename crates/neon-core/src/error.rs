//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Registry error: {0}")]
    Registry(#[from] neon_commands::RegistryError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] neon_navigation::NavigationError),

    #[error("Suggestion error: {0}")]
    Suggest(#[from] neon_suggest::SuggestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
