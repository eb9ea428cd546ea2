//! Neon Core
//!
//! Owns the new tab page state: configuration, the command registry, the
//! query resolver and the live suggestion feed. The page itself only renders.

mod config;
mod error;
mod newtab;

pub use config::Config;
pub use error::CoreError;
pub use newtab::NewTab;

// Re-export core components
pub use neon_commands::{
    AliasIndex, BoardTable, Category, CategoryGroup, Command, CommandRegistry, RegistryError,
};
pub use neon_navigation::{
    NavigationError, ParsedQuery, QueryKind, QueryResolver, ResolverConfig, ShortcutPattern,
    ShortcutSource,
};
pub use neon_suggest::{
    highlight, DuckDuckGoProvider, Highlight, LiveSuggestions, NullProvider, PhraseProvider,
    SuggestConfig, SuggestError, Suggester, Suggestion,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
