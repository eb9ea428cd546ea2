//! Input resolution for the command bar
//!
//! Exactly one interpretation wins per input. The resolver never fails:
//! anything unrecognised becomes a web search.

use serde::Serialize;
use std::sync::Arc;
use url::Url;

use neon_commands::{Command, CommandRegistry};

use crate::config::ResolverConfig;
use crate::detect::{encode_path, format_search_url, has_protocol, is_url};

/// Which interpretation produced the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Literal web address
    Url,
    /// Domain shortcut such as `4c g`
    Shortcut,
    /// Bare alias or command id
    Command,
    /// Alias followed by a search term
    CommandSearch,
    /// Alias followed by a path
    CommandPath,
    /// Fallback web search
    WebSearch,
}

/// Result of resolving command bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    /// Input as typed
    pub raw_query: String,
    #[serde(rename = "resolvedUrl")]
    pub url: String,
    pub kind: QueryKind,
    #[serde(rename = "matchedCommandId", skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(rename = "extractedSearchTerm", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "extractedPath", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "delimiterUsed", skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Prefix of the matched shortcut pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl ParsedQuery {
    fn new(raw: &str, url: String, kind: QueryKind) -> Self {
        Self {
            raw_query: raw.to_string(),
            url,
            kind,
            command_id: None,
            search: None,
            path: None,
            delimiter: None,
            shortcut: None,
        }
    }

    /// Command id and search term when the input is a command-scoped search
    pub fn command_search(&self) -> Option<(&str, &str)> {
        match (self.kind, self.command_id.as_deref(), self.search.as_deref()) {
            (QueryKind::CommandSearch, Some(id), Some(search)) if !search.is_empty() => {
                Some((id, search))
            }
            _ => None,
        }
    }
}

pub struct QueryResolver {
    registry: Arc<CommandRegistry>,
    config: ResolverConfig,
}

impl QueryResolver {
    pub fn new(registry: Arc<CommandRegistry>, config: ResolverConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve user input into a destination
    pub fn resolve(&self, raw: &str) -> ParsedQuery {
        let query = raw.trim();

        let parsed = self
            .resolve_url(raw, query)
            .or_else(|| self.resolve_shortcut(raw, query))
            .or_else(|| self.resolve_exact(raw, query))
            .or_else(|| self.resolve_search(raw, query))
            .or_else(|| self.resolve_path(raw, query))
            .unwrap_or_else(|| self.web_search(raw, query));

        tracing::debug!(
            kind = ?parsed.kind,
            command = parsed.command_id.as_deref().unwrap_or("-"),
            "Resolved command bar input"
        );
        parsed
    }

    fn resolve_url(&self, raw: &str, query: &str) -> Option<ParsedQuery> {
        if !is_url(query) {
            return None;
        }

        let url = if has_protocol(query) {
            query.to_string()
        } else {
            format!("https://{query}")
        };
        Some(ParsedQuery::new(raw, url, QueryKind::Url))
    }

    fn resolve_shortcut(&self, raw: &str, query: &str) -> Option<ParsedQuery> {
        let boards = self.registry.boards();
        let m = self
            .config
            .shortcuts
            .iter()
            .find_map(|pattern| pattern.matches(query, boards))?;

        let mut parsed = ParsedQuery::new(raw, m.url, QueryKind::Shortcut);
        parsed.shortcut = Some(m.prefix);
        parsed.path = Some(m.token);
        Some(parsed)
    }

    fn resolve_exact(&self, raw: &str, query: &str) -> Option<ParsedQuery> {
        let command = self.registry.lookup(query)?;

        let mut parsed = ParsedQuery::new(raw, command.url.clone(), QueryKind::Command);
        parsed.command_id = Some(command.id.clone());
        Some(parsed)
    }

    fn resolve_search(&self, raw: &str, query: &str) -> Option<ParsedQuery> {
        let delimiter = self.config.search_delimiter.as_str();
        let (key, rest) = query.split_once(delimiter)?;
        let search = rest.trim();
        if key.is_empty() || search.is_empty() {
            return None;
        }

        let command = self.registry.lookup(key)?;
        let template = command.search_template.as_deref()?;
        let url = Self::join_template(command, &format_search_url(template, search));

        let mut parsed = ParsedQuery::new(raw, url, QueryKind::CommandSearch);
        parsed.command_id = Some(command.id.clone());
        parsed.search = Some(search.to_string());
        parsed.delimiter = Some(delimiter.to_string());
        Some(parsed)
    }

    fn resolve_path(&self, raw: &str, query: &str) -> Option<ParsedQuery> {
        let delimiter = self.config.path_delimiter.as_str();
        let (key, path) = query.split_once(delimiter)?;
        if key.is_empty() || path.is_empty() {
            return None;
        }

        let command = self.registry.lookup(key)?;
        let url = format!("{}/{}", Self::origin(command), encode_path(path));

        let mut parsed = ParsedQuery::new(raw, url, QueryKind::CommandPath);
        parsed.command_id = Some(command.id.clone());
        parsed.path = Some(path.to_string());
        parsed.delimiter = Some(delimiter.to_string());
        Some(parsed)
    }

    fn web_search(&self, raw: &str, query: &str) -> ParsedQuery {
        let url = format_search_url(&self.config.default_search_template, query);
        let mut parsed = ParsedQuery::new(raw, url, QueryKind::WebSearch);
        parsed.search = Some(query.to_string());
        parsed
    }

    /// Absolute templates stand alone; relative ones resolve against the command URL
    fn join_template(command: &Command, formatted: &str) -> String {
        match Url::parse(&command.url).and_then(|base| base.join(formatted)) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", command.url, formatted),
        }
    }

    fn origin(command: &Command) -> String {
        match Url::parse(&command.url) {
            Ok(url) => url.origin().ascii_serialization(),
            Err(_) => command.url.trim_end_matches('/').to_string(),
        }
    }
}
