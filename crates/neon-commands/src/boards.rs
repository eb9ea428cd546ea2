//! Board shortcut table
//!
//! Maps short or descriptive board names to the canonical board path used
//! in board URLs (`tech` → `g`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::Result;

const BUILTIN_BOARDS: &[(&str, &str)] = &[
    ("a", "a"),
    ("anime", "a"),
    ("ck", "ck"),
    ("cooking", "ck"),
    ("co", "co"),
    ("comics", "co"),
    ("diy", "diy"),
    ("fit", "fit"),
    ("g", "g"),
    ("tech", "g"),
    ("technology", "g"),
    ("lit", "lit"),
    ("books", "lit"),
    ("mu", "mu"),
    ("music", "mu"),
    ("sci", "sci"),
    ("science", "sci"),
    ("v", "v"),
    ("games", "v"),
    ("vg", "vg"),
    ("wg", "wg"),
    ("wallpapers", "wg"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct BoardTable {
    boards: BTreeMap<String, String>,
}

impl BoardTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        BUILTIN_BOARDS
            .iter()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect()
    }

    pub fn insert(&mut self, name: &str, path: &str) {
        self.boards
            .insert(name.trim().to_lowercase(), path.trim().to_string());
    }

    /// Board names and paths must be single non-empty tokens
    pub fn validate(&self) -> Result<()> {
        for (name, path) in &self.boards {
            let bad = |s: &str| s.is_empty() || s.contains(char::is_whitespace) || s.contains('/');
            if bad(name) || bad(path) {
                return Err(RegistryError::InvalidBoard(format!("{name} -> {path}")));
            }
        }
        Ok(())
    }

    /// Canonical path for a board name (case-insensitive)
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.boards.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Board names starting with `partial`, in name order
    pub fn names_starting_with(&self, partial: &str) -> impl Iterator<Item = &str> + '_ {
        let partial = partial.to_lowercase();
        self.boards
            .keys()
            .filter(move |name| name.starts_with(&partial))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl From<BTreeMap<String, String>> for BoardTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BoardTable> for BTreeMap<String, String> {
    fn from(table: BoardTable) -> Self {
        table.boards
    }
}

impl FromIterator<(String, String)> for BoardTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, path) in iter {
            table.insert(&name, &path);
        }
        table
    }
}
