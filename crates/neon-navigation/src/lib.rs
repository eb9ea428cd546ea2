//! Neon Navigation
//!
//! Command bar input resolution, first match wins:
//! 1. Literal URL → navigate (scheme added when missing)
//! 2. Shortcut pattern (`4c g`, `sr rust`) → side-table URL
//! 3. Exact alias or id → command URL
//! 4. Alias + search term → command search template
//! 5. Alias + path → command origin + path
//! 6. Anything else → default web search

mod config;
mod detect;
mod error;
mod input;
mod shortcut;

pub use config::{ResolverConfig, DEFAULT_SEARCH_TEMPLATE};
pub use detect::{encode_path, format_search_url, has_protocol, is_url};
pub use error::NavigationError;
pub use input::{ParsedQuery, QueryKind, QueryResolver};
pub use shortcut::{ShortcutMatch, ShortcutPattern, ShortcutSource};

pub type Result<T> = std::result::Result<T, NavigationError>;
