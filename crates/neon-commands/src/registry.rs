//! Command registry
//!
//! Immutable table of commands plus the derived alias index. Built and
//! validated once; configuration mistakes surface here rather than per query.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use url::Url;

use crate::boards::BoardTable;
use crate::builtin;
use crate::command::{Category, Command, SEARCH_PLACEHOLDER};
use crate::error::RegistryError;
use crate::index::AliasIndex;
use crate::Result;

/// On-disk registry layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    categories: Vec<Category>,
    commands: Vec<Command>,
    #[serde(default)]
    boards: Option<BoardTable>,
}

/// A category with its commands, in registry order
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: &'a Category,
    pub commands: Vec<&'a Command>,
}

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    categories: Vec<Category>,
    commands: Vec<Command>,
    by_id: HashMap<String, usize>,
    index: AliasIndex,
    boards: BoardTable,
}

impl CommandRegistry {
    /// Validate and index a command table
    pub fn new(
        categories: Vec<Category>,
        commands: Vec<Command>,
        boards: BoardTable,
    ) -> Result<Self> {
        let mut category_keys = HashSet::new();
        for category in &categories {
            if !category_keys.insert(category.key.as_str()) {
                return Err(RegistryError::DuplicateCategory(category.key.clone()));
            }
        }

        let mut by_id = HashMap::with_capacity(commands.len());
        for (i, command) in commands.iter().enumerate() {
            Self::validate_command(command, &category_keys)?;
            if by_id.insert(command.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId(command.id.clone()));
            }
        }

        boards.validate()?;
        let index = AliasIndex::build(&commands)?;

        tracing::debug!(
            commands = commands.len(),
            aliases = index.len(),
            boards = boards.len(),
            "Command registry built"
        );

        Ok(Self {
            categories,
            commands,
            by_id,
            index,
            boards,
        })
    }

    /// The table shipped with Neon
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::categories(), builtin::commands(), BoardTable::builtin())
    }

    /// Parse a JSON registry. A missing `boards` table falls back to the built-in one.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        let boards = file.boards.unwrap_or_else(BoardTable::builtin);
        Self::new(file.categories, file.commands, boards)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), commands = registry.len(), "Loaded command registry");
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = RegistryFile {
            categories: self.categories.clone(),
            commands: self.commands.clone(),
            boards: Some(self.boards.clone()),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    fn validate_command(command: &Command, category_keys: &HashSet<&str>) -> Result<()> {
        if command.id.trim().is_empty() {
            return Err(RegistryError::EmptyId);
        }

        let url_ok = Url::parse(&command.url)
            .map(|u| !u.cannot_be_a_base())
            .unwrap_or(false);
        if !url_ok {
            return Err(RegistryError::InvalidUrl {
                command: command.id.clone(),
                url: command.url.clone(),
            });
        }

        if let Some(template) = &command.search_template {
            if !template.contains(SEARCH_PLACEHOLDER) {
                return Err(RegistryError::MissingPlaceholder(command.id.clone()));
            }
        }

        // Registries without categories skip the check
        if !category_keys.is_empty() && !category_keys.contains(command.category.as_str()) {
            return Err(RegistryError::UnknownCategory {
                command: command.id.clone(),
                category: command.category.clone(),
            });
        }

        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Command> {
        self.by_id.get(id).map(|&i| &self.commands[i])
    }

    /// Resolve an alias or id (case-insensitive) to its command
    pub fn lookup(&self, alias: &str) -> Option<&Command> {
        self.index.lookup(alias).and_then(|id| self.get(id))
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn alias_index(&self) -> &AliasIndex {
        &self.index
    }

    pub fn boards(&self) -> &BoardTable {
        &self.boards
    }

    /// Every declared alias with its owning command, in registry order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &Command)> + '_ {
        self.commands
            .iter()
            .flat_map(|c| c.aliases.iter().map(move |a| (a.as_str(), c)))
    }

    /// Commands grouped by category, in category order
    pub fn by_category(&self) -> Vec<CategoryGroup<'_>> {
        self.categories
            .iter()
            .map(|category| CategoryGroup {
                category,
                commands: self
                    .commands
                    .iter()
                    .filter(|c| c.category == category.key)
                    .collect(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> (Vec<Category>, Vec<Command>) {
        let categories = vec![Category::new("dev", "Development")];
        let commands = vec![
            Command::new("github", "GitHub", "https://github.com")
                .with_category("dev")
                .with_aliases(["gh"]),
            Command::new("notion", "Notion", "https://notion.so")
                .with_category("dev")
                .with_search_template("/search?q={}"),
        ];
        (categories, commands)
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = CommandRegistry::builtin().unwrap();
        assert!(!registry.is_empty());
        assert_eq!(registry.lookup("GPT").map(|c| c.id.as_str()), Some("chatgpt"));
        assert_eq!(registry.lookup("ytm").map(|c| c.id.as_str()), Some("ytmusic"));
        assert!(registry.boards().lookup("g").is_some());

        // Every alias resolves to the command that declares it
        for (alias, command) in registry.aliases() {
            assert_eq!(registry.lookup(alias).unwrap().id, command.id);
        }
    }

    #[test]
    fn test_duplicate_id() {
        let (categories, mut commands) = sample();
        commands.push(Command::new("github", "Other", "https://example.com").with_category("dev"));

        let err = CommandRegistry::new(categories, commands, BoardTable::new()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "github"));
    }

    #[test]
    fn test_invalid_url() {
        let (categories, mut commands) = sample();
        commands.push(Command::new("bad", "Bad", "not a url").with_category("dev"));

        let err = CommandRegistry::new(categories, commands, BoardTable::new()).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidUrl { .. }));
    }

    #[test]
    fn test_template_without_placeholder() {
        let (categories, mut commands) = sample();
        commands[1].search_template = Some("/search".to_string());

        let err = CommandRegistry::new(categories, commands, BoardTable::new()).unwrap_err();
        assert!(matches!(err, RegistryError::MissingPlaceholder(id) if id == "notion"));
    }

    #[test]
    fn test_unknown_category() {
        let (categories, mut commands) = sample();
        commands[0].category = "media".to_string();

        let err = CommandRegistry::new(categories, commands, BoardTable::new()).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCategory { .. }));
    }

    #[test]
    fn test_by_category_keeps_order() {
        let registry = CommandRegistry::builtin().unwrap();
        let groups = registry.by_category();

        let keys: Vec<&str> = groups.iter().map(|g| g.category.key.as_str()).collect();
        assert_eq!(keys, vec!["ai", "dev", "media", "tools", "services"]);

        let total: usize = groups.iter().map(|g| g.commands.len()).sum();
        assert_eq!(total, registry.len());
        assert_eq!(groups[0].commands[0].id, "chatgpt");
    }

    #[test]
    fn test_from_json_and_load() {
        let json = r#"{
            "categories": [{"key": "dev", "name": "Development"}],
            "commands": [
                {"id": "github", "name": "GitHub", "url": "https://github.com",
                 "category": "dev", "aliases": ["gh"]}
            ]
        }"#;

        let registry = CommandRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 1);
        // Missing boards fall back to the built-in table
        assert_eq!(registry.boards().lookup("tech"), Some("g"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let loaded = CommandRegistry::load(file.path()).unwrap();
        assert_eq!(loaded.lookup("gh").unwrap().id, "github");
    }

    #[test]
    fn test_json_round_trip_of_builtin() {
        let registry = CommandRegistry::builtin().unwrap();
        let json = registry.to_json().unwrap();
        let reparsed = CommandRegistry::from_json(&json).unwrap();
        assert_eq!(reparsed.commands(), registry.commands());
        assert_eq!(reparsed.boards(), registry.boards());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CommandRegistry::from_json("{\"commands\": 3}"),
            Err(RegistryError::Parse(_))
        ));
    }
}
