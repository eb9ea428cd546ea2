//! Domain shortcut patterns
//!
//! A shortcut is `<prefix> <token>` where the token is mapped through a side
//! table (boards) or taken verbatim (subreddit names). Shortcuts are checked
//! before alias parsing because `prefix token` also looks like `alias search`.

use serde::{Deserialize, Serialize};

use neon_commands::{BoardTable, SEARCH_PLACEHOLDER};

use crate::detect::format_search_url;
use crate::error::NavigationError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutSource {
    /// Token must be a known board name; the canonical path is substituted
    Board,
    /// Any word token (`[A-Za-z0-9_]+`) is substituted as-is
    Token,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutPattern {
    pub prefix: String,
    /// URL template containing `{}`
    pub template: String,
    pub source: ShortcutSource,
    /// Names offered as suggestions for `Token` shortcuts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub completions: Vec<String>,
}

/// A matched shortcut and the URL it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutMatch {
    pub prefix: String,
    pub token: String,
    pub url: String,
}

impl ShortcutPattern {
    pub fn board(prefix: &str, template: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            template: template.to_string(),
            source: ShortcutSource::Board,
            completions: Vec::new(),
        }
    }

    pub fn token(prefix: &str, template: &str, completions: &[&str]) -> Self {
        Self {
            prefix: prefix.to_string(),
            template: template.to_string(),
            source: ShortcutSource::Token,
            completions: completions.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() || self.prefix.contains(char::is_whitespace) {
            return Err(NavigationError::InvalidShortcut(self.prefix.clone()));
        }
        if !self.template.contains(SEARCH_PLACEHOLDER) {
            return Err(NavigationError::InvalidTemplate(self.template.clone()));
        }
        Ok(())
    }

    /// Split `input` into this pattern's prefix and the remainder, if it starts with it
    pub fn strip_prefix<'a>(&self, input: &'a str) -> Option<&'a str> {
        let (head, rest) = input.split_once(char::is_whitespace)?;
        head.eq_ignore_ascii_case(&self.prefix).then(|| rest.trim_start())
    }

    /// Match `<prefix> <token>` exactly (two whitespace-separated tokens)
    pub fn matches(&self, input: &str, boards: &BoardTable) -> Option<ShortcutMatch> {
        let token = self.strip_prefix(input)?;
        if token.is_empty() || token.contains(char::is_whitespace) {
            return None;
        }

        let target = match self.source {
            ShortcutSource::Board => boards.lookup(token)?,
            ShortcutSource::Token => {
                if !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return None;
                }
                token
            }
        };

        Some(ShortcutMatch {
            prefix: self.prefix.clone(),
            token: token.to_string(),
            url: format_search_url(&self.template, target),
        })
    }

    /// Completion names for `partial`, in table order
    pub fn completions<'a>(&'a self, partial: &str, boards: &'a BoardTable) -> Vec<&'a str> {
        match self.source {
            ShortcutSource::Board => boards.names_starting_with(partial).collect(),
            ShortcutSource::Token => {
                let partial = partial.to_lowercase();
                self.completions
                    .iter()
                    .filter(|name| name.to_lowercase().starts_with(&partial))
                    .map(String::as_str)
                    .collect()
            }
        }
    }
}
