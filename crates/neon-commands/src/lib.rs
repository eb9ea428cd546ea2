//! Neon Command Registry
//!
//! The static table behind the new tab page:
//! - `Command`: a named shortcut with an optional search template
//! - `AliasIndex`: lowercased alias or id → command id
//! - `BoardTable`: short board name → canonical board path
//!
//! A registry is validated once at start-up and is read-only afterwards.

mod boards;
mod builtin;
mod command;
mod error;
mod index;
mod registry;

pub use boards::BoardTable;
pub use command::{Category, Command, SEARCH_PLACEHOLDER};
pub use error::RegistryError;
pub use index::AliasIndex;
pub use registry::{CategoryGroup, CommandRegistry};

pub type Result<T> = std::result::Result<T, RegistryError>;
