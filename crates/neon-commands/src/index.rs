//! Alias lookup table

use std::collections::HashMap;

use crate::command::Command;
use crate::error::RegistryError;
use crate::Result;

/// Lowercased alias (or command id) → command id
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: HashMap<String, String>,
}

impl AliasIndex {
    /// Build the index, rejecting any alias claimed by two different commands
    pub fn build(commands: &[Command]) -> Result<Self> {
        let mut entries: HashMap<String, String> = HashMap::new();

        for command in commands {
            let keys = std::iter::once(&command.id).chain(command.aliases.iter());
            for key in keys {
                let key = key.trim().to_lowercase();
                if key.is_empty() {
                    continue;
                }

                match entries.get(&key) {
                    Some(existing) if existing != &command.id => {
                        return Err(RegistryError::AliasCollision {
                            alias: key,
                            command: command.id.clone(),
                            existing: existing.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        entries.insert(key, command.id.clone());
                    }
                }
            }
        }

        Ok(Self { entries })
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.entries.get(&alias.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.lookup(alias).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands() -> Vec<Command> {
        vec![
            Command::new("github", "GitHub", "https://github.com").with_aliases(["gh", "Git"]),
            Command::new("drive", "Google Drive", "https://drive.google.com")
                .with_aliases(["gd", "drive"]),
        ]
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = AliasIndex::build(&commands()).unwrap();
        assert_eq!(index.lookup("GH"), Some("github"));
        assert_eq!(index.lookup("git"), Some("github"));
        assert_eq!(index.lookup("GitHub"), Some("github"));
        assert_eq!(index.lookup("nope"), None);
    }

    #[test]
    fn test_alias_equal_to_own_id() {
        let index = AliasIndex::build(&commands()).unwrap();
        assert_eq!(index.lookup("drive"), Some("drive"));
        // github, gh, git, drive, gd
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_alias_collision() {
        let mut cmds = commands();
        cmds.push(Command::new("gitlab", "GitLab", "https://gitlab.com").with_aliases(["gh"]));

        match AliasIndex::build(&cmds) {
            Err(RegistryError::AliasCollision {
                alias,
                command,
                existing,
            }) => {
                assert_eq!(alias, "gh");
                assert_eq!(command, "gitlab");
                assert_eq!(existing, "github");
            }
            other => panic!("Expected AliasCollision, got {:?}", other),
        }
    }
}
