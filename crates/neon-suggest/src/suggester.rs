//! Suggestion ranking
//!
//! Static matches come first (exact aliases, partial aliases, shortcut
//! completions), then remote phrases fill whatever room is left.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use neon_navigation::QueryResolver;

use crate::error::SuggestError;
use crate::provider::PhraseProvider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_command_id: Option<String>,
    pub is_remote_search_phrase: bool,
}

impl Suggestion {
    pub fn alias(text: &str, command_id: &str) -> Self {
        Self {
            display_text: text.to_string(),
            source_command_id: Some(command_id.to_string()),
            is_remote_search_phrase: false,
        }
    }

    pub fn shortcut(text: String) -> Self {
        Self {
            display_text: text,
            source_command_id: None,
            is_remote_search_phrase: false,
        }
    }

    pub fn remote(text: String, command_id: Option<&str>) -> Self {
        Self {
            display_text: text,
            source_command_id: command_id.map(str::to_string),
            is_remote_search_phrase: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Maximum number of suggestions returned
    pub limit: usize,
    /// Maximum completions per shortcut pattern
    pub shortcut_limit: usize,
    /// Upper bound on a single remote fetch
    pub fetch_timeout: Duration,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: 4,
            shortcut_limit: 3,
            fetch_timeout: Duration::from_millis(1500),
        }
    }
}

pub struct Suggester {
    resolver: Arc<QueryResolver>,
    provider: Arc<dyn PhraseProvider>,
    config: SuggestConfig,
}

impl Suggester {
    pub fn new(
        resolver: Arc<QueryResolver>,
        provider: Arc<dyn PhraseProvider>,
        config: SuggestConfig,
    ) -> Self {
        Self {
            resolver,
            provider,
            config,
        }
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Ordered suggestions for `raw`, never more than the configured limit
    pub async fn suggest(&self, raw: &str) -> Vec<Suggestion> {
        let query = raw.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let limit = self.config.limit;
        let mut suggestions = self.alias_matches(query);
        suggestions.extend(self.shortcut_matches(query));
        suggestions.truncate(limit);

        let room = limit - suggestions.len();
        if room == 0 {
            return suggestions;
        }

        let parsed = self.resolver.resolve(query);
        match parsed.command_search() {
            Some((command_id, term)) => {
                let delimiter = &self.resolver.config().search_delimiter;
                let phrases = self.fetch(term).await;
                suggestions.extend(Self::without_term(phrases, term).take(room).map(|p| {
                    Suggestion::remote(format!("{command_id}{delimiter}{p}"), Some(command_id))
                }));
            }
            None => {
                let phrases = self.fetch(query).await;
                suggestions.extend(
                    Self::without_term(phrases, query)
                        .take(room)
                        .map(|p| Suggestion::remote(p, None)),
                );
            }
        }

        suggestions
    }

    /// Exact alias matches first, then aliases containing the query
    fn alias_matches(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.to_lowercase();
        let registry = self.resolver.registry();

        let mut exact = Vec::new();
        let mut partial = Vec::new();
        for (alias, command) in registry.aliases() {
            let lowered = alias.to_lowercase();
            if lowered == needle {
                exact.push(Suggestion::alias(alias, &command.id));
            } else if lowered.contains(&needle) {
                partial.push(Suggestion::alias(alias, &command.id));
            }
        }

        exact.extend(partial);
        exact
    }

    fn shortcut_matches(&self, query: &str) -> Vec<Suggestion> {
        let boards = self.resolver.registry().boards();
        let mut suggestions = Vec::new();

        for pattern in &self.resolver.config().shortcuts {
            let Some(partial) = pattern.strip_prefix(query) else {
                continue;
            };
            if partial.contains(char::is_whitespace) {
                continue;
            }

            suggestions.extend(
                pattern
                    .completions(partial, boards)
                    .into_iter()
                    .take(self.config.shortcut_limit)
                    .map(|name| Suggestion::shortcut(format!("{} {}", pattern.prefix, name))),
            );
        }

        suggestions
    }

    /// Remote phrases for `term`; failures and timeouts yield nothing
    async fn fetch(&self, term: &str) -> Vec<String> {
        let fetch = self.provider.fetch_phrases(term);
        let result = match tokio::time::timeout(self.config.fetch_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(SuggestError::Timeout(self.config.fetch_timeout)),
        };
        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, term, "Failed to fetch search suggestions");
            Vec::new()
        })
    }

    fn without_term(phrases: Vec<String>, term: &str) -> impl Iterator<Item = String> {
        let term = term.to_lowercase();
        phrases
            .into_iter()
            .filter(move |phrase| phrase.to_lowercase() != term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{resolver, ScriptedProvider};

    fn suggester(provider: ScriptedProvider) -> Suggester {
        Suggester::new(resolver(), Arc::new(provider), SuggestConfig::default())
    }

    fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.display_text.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_input_skips_fetch() {
        let provider = ScriptedProvider::new();
        let calls = provider.calls();
        let suggester = suggester(provider);

        assert!(suggester.suggest("").await.is_empty());
        assert!(suggester.suggest("   ").await.is_empty());
        assert!(calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_exact_before_partial() {
        let suggester = suggester(ScriptedProvider::new());

        // exact "r" (reddit), then rd and torrent contain it
        let suggestions = suggester.suggest("R").await;
        assert_eq!(suggestions[0].display_text, "r");
        assert_eq!(suggestions[0].source_command_id.as_deref(), Some("reddit"));
        assert!(!suggestions[0].is_remote_search_phrase);
        assert_eq!(texts(&suggestions)[1..], ["rd", "torrent"]);
    }

    #[tokio::test]
    async fn test_limit_caps_static_matches() {
        let provider = ScriptedProvider::new();
        let calls = provider.calls();
        let suggester = suggester(provider);

        let suggestions = suggester.suggest("t").await;
        assert_eq!(texts(&suggestions), vec!["git", "ytm", "torrent"]);
        // room left, so a generic fetch was made
        assert_eq!(calls.lock().as_slice(), ["t"]);

        let config = SuggestConfig {
            limit: 2,
            ..Default::default()
        };
        let provider = ScriptedProvider::new();
        let calls = provider.calls();
        let suggester = Suggester::new(resolver(), Arc::new(provider), config);
        let suggestions = suggester.suggest("t").await;
        assert_eq!(texts(&suggestions), vec!["git", "ytm"]);
        assert!(calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_generic_remote_phrases() {
        let provider = ScriptedProvider::new().with("zig", &["zig", "ZIG", "zig lang", "zigbee", "zig book"]);
        let suggester = suggester(provider);

        let suggestions = suggester.suggest("zig").await;
        assert_eq!(texts(&suggestions), vec!["zig lang", "zigbee", "zig book"]);
        assert!(suggestions.iter().all(|s| s.is_remote_search_phrase));
        assert!(suggestions.iter().all(|s| s.source_command_id.is_none()));
    }

    #[tokio::test]
    async fn test_command_scoped_phrases() {
        let provider = ScriptedProvider::new().with("lofi", &["lofi", "lofi hip hop", "lofi girl"]);
        let calls = provider.calls();
        let suggester = suggester(provider);

        let suggestions = suggester.suggest("ytm lofi").await;
        assert_eq!(calls.lock().as_slice(), ["lofi"]);
        assert_eq!(
            texts(&suggestions),
            vec!["ytmusic lofi hip hop", "ytmusic lofi girl"]
        );
        assert_eq!(suggestions[0].source_command_id.as_deref(), Some("ytmusic"));
        assert!(suggestions[0].is_remote_search_phrase);
    }

    #[tokio::test]
    async fn test_static_then_remote_up_to_limit() {
        let provider = ScriptedProvider::new().with("gi", &["gif", "gimp", "gin", "gibbon"]);
        let suggester = suggester(provider);

        let suggestions = suggester.suggest("gi").await;
        assert_eq!(texts(&suggestions), vec!["git", "gif", "gimp", "gin"]);
        assert!(!suggestions[0].is_remote_search_phrase);
        assert!(suggestions[1].is_remote_search_phrase);
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_static() {
        let provider = ScriptedProvider::new().failing("gi");
        let suggester = suggester(provider);

        let suggestions = suggester.suggest("gi").await;
        assert_eq!(texts(&suggestions), vec!["git"]);
    }

    #[tokio::test]
    async fn test_provider_timeout() {
        let provider = ScriptedProvider::new().hanging("gi");
        let config = SuggestConfig {
            fetch_timeout: Duration::from_millis(20),
            ..Default::default()
        };
        let suggester = Suggester::new(resolver(), Arc::new(provider), config);

        let suggestions = suggester.suggest("gi").await;
        assert_eq!(texts(&suggestions), vec!["git"]);
    }

    #[tokio::test]
    async fn test_shortcut_completions() {
        let provider = ScriptedProvider::new();
        let suggester = suggester(provider);

        let suggestions = suggester.suggest("4c co").await;
        assert_eq!(texts(&suggestions), vec!["4c co", "4c comics", "4c cooking"]);

        let suggestions = suggester.suggest("sr ru").await;
        assert_eq!(texts(&suggestions), vec!["sr rust"]);
        assert!(suggestions[0].source_command_id.is_none());
    }

    #[tokio::test]
    async fn test_shortcut_completions_are_capped() {
        let config = SuggestConfig {
            limit: 6,
            ..Default::default()
        };
        let suggester = Suggester::new(resolver(), Arc::new(ScriptedProvider::new()), config);

        // ck, co, comics and cooking all start with "c"
        let suggestions = suggester.suggest("4c c").await;
        assert_eq!(texts(&suggestions), vec!["4c ck", "4c co", "4c comics"]);
    }

    #[tokio::test]
    async fn test_trailing_space_still_matches_alias() {
        let suggester = suggester(ScriptedProvider::new());

        let suggestions = suggester.suggest("gh ").await;
        assert_eq!(texts(&suggestions), vec!["gh"]);
        assert_eq!(suggestions[0].source_command_id.as_deref(), Some("github"));
        assert_eq!(suggester.suggest("gh ").await, suggester.suggest("gh").await);
    }
}
