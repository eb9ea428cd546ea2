//! New tab configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use neon_navigation::{ResolverConfig, ShortcutPattern, DEFAULT_SEARCH_TEMPLATE};
use neon_suggest::{DuckDuckGoProvider, SuggestConfig};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command registry JSON; the built-in table is used when unset
    pub registry_path: Option<PathBuf>,
    /// Separates a command alias from its search term
    pub search_delimiter: String,
    /// Separates a command alias from a path
    pub path_delimiter: String,
    /// Search engine URL template
    pub default_search_template: String,
    pub shortcuts: Vec<ShortcutPattern>,
    /// Maximum suggestions shown under the command bar
    pub suggestion_limit: usize,
    /// Maximum completions per shortcut pattern
    pub shortcut_suggestion_limit: usize,
    /// Autocomplete endpoint (`?q=<term>` → `[{"phrase": ...}]`)
    pub suggest_endpoint: String,
    pub suggest_timeout_ms: u64,
}

impl Config {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&json)?;

        // Registry paths are relative to the config file
        if let (Some(registry), Some(dir)) = (config.registry_path.as_ref(), path.parent()) {
            if registry.is_relative() {
                config.registry_path = Some(dir.join(registry));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load `<config dir>/neon/config.json` if it exists, defaults otherwise
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            tracing::info!(path = %path.display(), "Loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("neon"))
            .unwrap_or_else(|| PathBuf::from(".neon"))
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    pub fn validate(&self) -> Result<()> {
        self.resolver_config().validate()?;

        if self.suggestion_limit == 0 {
            return Err(CoreError::Config(
                "suggestion_limit must be at least 1".to_string(),
            ));
        }
        if self.suggest_timeout_ms == 0 {
            return Err(CoreError::Config(
                "suggest_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            search_delimiter: self.search_delimiter.clone(),
            path_delimiter: self.path_delimiter.clone(),
            default_search_template: self.default_search_template.clone(),
            shortcuts: self.shortcuts.clone(),
        }
    }

    pub fn suggest_config(&self) -> SuggestConfig {
        SuggestConfig {
            limit: self.suggestion_limit,
            shortcut_limit: self.shortcut_suggestion_limit,
            fetch_timeout: self.suggest_timeout(),
        }
    }

    pub fn suggest_timeout(&self) -> Duration {
        Duration::from_millis(self.suggest_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: None,
            search_delimiter: " ".to_string(),
            path_delimiter: "/".to_string(),
            default_search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
            shortcuts: ResolverConfig::default_shortcuts(),
            suggestion_limit: 4,
            shortcut_suggestion_limit: 3,
            suggest_endpoint: DuckDuckGoProvider::DEFAULT_ENDPOINT.to_string(),
            suggest_timeout_ms: 1500,
        }
    }
}
