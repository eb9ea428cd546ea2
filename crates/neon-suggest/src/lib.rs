//! Neon Suggestions
//!
//! Ranked completions for in-progress command bar input:
//! - exact alias matches, then partial alias matches
//! - shortcut completions (`4c g…`, `sr ru…`)
//! - remote search phrases, scoped to a command's search term when present
//!
//! `LiveSuggestions` applies only the newest request's result.

mod error;
mod highlight;
mod live;
mod provider;
mod suggester;

#[cfg(test)]
mod testing;

pub use error::SuggestError;
pub use highlight::{highlight, Highlight};
pub use live::LiveSuggestions;
pub use provider::{DuckDuckGoProvider, NullProvider, PhraseProvider};
pub use suggester::{SuggestConfig, Suggester, Suggestion};

pub type Result<T> = std::result::Result<T, SuggestError>;
