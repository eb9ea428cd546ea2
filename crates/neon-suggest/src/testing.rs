//! Test fixtures shared by the suggestion tests

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

use neon_commands::{BoardTable, Category, Command, CommandRegistry};
use neon_navigation::{QueryResolver, ResolverConfig};

use crate::error::SuggestError;
use crate::provider::PhraseProvider;
use crate::Result;

pub(crate) fn resolver() -> Arc<QueryResolver> {
    let categories = vec![
        Category::new("dev", "Development"),
        Category::new("media", "Media"),
        Category::new("tools", "Tools"),
    ];
    let commands = vec![
        Command::new("github", "GitHub", "https://github.com")
            .with_category("dev")
            .with_search_template("/search?q={}")
            .with_aliases(["gh", "git"]),
        Command::new("ytmusic", "YouTube Music", "https://music.youtube.com")
            .with_category("media")
            .with_search_template("/search?q={}")
            .with_aliases(["ytm", "music"]),
        Command::new("reddit", "Reddit", "https://reddit.com")
            .with_category("tools")
            .with_search_template("/search/?q={}")
            .with_aliases(["rd", "r"]),
        Command::new("nyaa", "Nyaa", "https://nyaa.si")
            .with_category("media")
            .with_aliases(["ny", "torrent"]),
    ];

    let registry = CommandRegistry::new(categories, commands, BoardTable::builtin()).unwrap();
    Arc::new(QueryResolver::new(
        Arc::new(registry),
        ResolverConfig::default(),
    ))
}

enum Script {
    Phrases(Vec<String>),
    Fail,
    Hang,
    Gated(Arc<Notify>, Vec<String>),
}

/// Provider answering from a fixed script and recording every requested term
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    scripts: HashMap<String, Script>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, term: &str, phrases: &[&str]) -> Self {
        let phrases = phrases.iter().map(|p| p.to_string()).collect();
        self.scripts.insert(term.to_string(), Script::Phrases(phrases));
        self
    }

    pub(crate) fn failing(mut self, term: &str) -> Self {
        self.scripts.insert(term.to_string(), Script::Fail);
        self
    }

    pub(crate) fn hanging(mut self, term: &str) -> Self {
        self.scripts.insert(term.to_string(), Script::Hang);
        self
    }

    /// Answer `term` only after `gate` is notified
    pub(crate) fn gated(mut self, term: &str, gate: Arc<Notify>, phrases: &[&str]) -> Self {
        let phrases = phrases.iter().map(|p| p.to_string()).collect();
        self.scripts
            .insert(term.to_string(), Script::Gated(gate, phrases));
        self
    }

    pub(crate) fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PhraseProvider for ScriptedProvider {
    async fn fetch_phrases(&self, term: &str) -> Result<Vec<String>> {
        self.calls.lock().push(term.to_string());

        match self.scripts.get(term) {
            None => Ok(Vec::new()),
            Some(Script::Phrases(phrases)) => Ok(phrases.clone()),
            Some(Script::Fail) => Err(SuggestError::Provider("scripted failure".to_string())),
            Some(Script::Hang) => std::future::pending().await,
            Some(Script::Gated(gate, phrases)) => {
                gate.notified().await;
                Ok(phrases.clone())
            }
        }
    }
}
