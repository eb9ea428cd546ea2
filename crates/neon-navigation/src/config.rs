//! Resolver configuration

use serde::{Deserialize, Serialize};

use neon_commands::SEARCH_PLACEHOLDER;

use crate::error::NavigationError;
use crate::shortcut::ShortcutPattern;
use crate::Result;

/// Fallback web search used when nothing else matches
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://search.brave.com/search?q={}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Separates a command alias from its search term (`yt cats`)
    pub search_delimiter: String,
    /// Separates a command alias from a path (`gh/rust-lang/rust`)
    pub path_delimiter: String,
    /// Search engine URL template (`{}` replaced with the encoded query)
    pub default_search_template: String,
    pub shortcuts: Vec<ShortcutPattern>,
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.search_delimiter.is_empty() {
            return Err(NavigationError::EmptyDelimiter("search_delimiter"));
        }
        if self.path_delimiter.is_empty() {
            return Err(NavigationError::EmptyDelimiter("path_delimiter"));
        }
        if !self.default_search_template.contains(SEARCH_PLACEHOLDER) {
            return Err(NavigationError::InvalidTemplate(
                self.default_search_template.clone(),
            ));
        }
        for shortcut in &self.shortcuts {
            shortcut.validate()?;
        }
        Ok(())
    }

    pub fn default_shortcuts() -> Vec<ShortcutPattern> {
        vec![
            ShortcutPattern::board("4c", "https://boards.4chan.org/{}/catalog"),
            ShortcutPattern::token(
                "sr",
                "https://www.reddit.com/r/{}",
                &["rust", "programming", "linux", "selfhosted", "unixporn", "anime"],
            ),
        ]
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            search_delimiter: " ".to_string(),
            path_delimiter: "/".to_string(),
            default_search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
            shortcuts: Self::default_shortcuts(),
        }
    }
}
