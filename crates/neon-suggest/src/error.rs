//! Suggestion error types

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed suggestion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Provider error: {0}")]
    Provider(String),
}
