//! New tab page state container
//!
//! Everything the page needs flows through here: the command grid, input
//! resolution on submit and suggestions on every keystroke.

use std::future::Future;
use std::sync::Arc;

use neon_commands::{CategoryGroup, CommandRegistry};
use neon_navigation::{ParsedQuery, QueryResolver};
use neon_suggest::{DuckDuckGoProvider, LiveSuggestions, PhraseProvider, Suggester, Suggestion};

use crate::config::Config;
use crate::Result;

pub struct NewTab {
    /// Configuration
    config: Config,
    /// Command table, shared read-only
    registry: Arc<CommandRegistry>,
    /// Input resolver for the command bar
    resolver: Arc<QueryResolver>,
    /// Suggestion feed (latest request wins)
    suggestions: LiveSuggestions,
}

impl NewTab {
    /// Build the page state with the configured autocomplete endpoint
    pub fn new(config: Config) -> Result<Self> {
        let provider = DuckDuckGoProvider::new(&config.suggest_endpoint, config.suggest_timeout())?;
        Self::with_provider(config, Arc::new(provider))
    }

    pub fn with_provider(config: Config, provider: Arc<dyn PhraseProvider>) -> Result<Self> {
        config.validate()?;

        let registry = match &config.registry_path {
            Some(path) => CommandRegistry::load(path)?,
            None => CommandRegistry::builtin()?,
        };
        let registry = Arc::new(registry);

        let resolver = Arc::new(QueryResolver::new(
            Arc::clone(&registry),
            config.resolver_config(),
        ));
        let suggester = Suggester::new(Arc::clone(&resolver), provider, config.suggest_config());

        tracing::info!(
            commands = registry.len(),
            categories = registry.categories().len(),
            "New tab initialized"
        );

        Ok(Self {
            config,
            registry,
            resolver,
            suggestions: LiveSuggestions::new(Arc::new(suggester)),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    // === Command bar ===

    /// Resolve submitted input to a destination. Never fails.
    pub fn resolve_input(&self, input: &str) -> ParsedQuery {
        self.resolver.resolve(input)
    }

    /// Suggestions for the current input; `None` if a newer input superseded it
    pub fn suggest<'a>(
        &'a self,
        input: &'a str,
    ) -> impl Future<Output = Option<Vec<Suggestion>>> + 'a {
        self.suggestions.update(input)
    }

    pub fn current_suggestions(&self) -> Vec<Suggestion> {
        self.suggestions.current()
    }

    /// Search box closed: forget suggestions and ignore in-flight fetches
    pub fn close_search(&self) {
        self.suggestions.clear();
    }

    // === Command grid ===

    pub fn command_grid(&self) -> Vec<CategoryGroup<'_>> {
        self.registry.by_category()
    }
}
