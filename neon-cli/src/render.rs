//! Plain-text and JSON output

use serde_json::{json, Value};
use std::fmt::Write;

use neon_core::{highlight, CategoryGroup, Suggestion};

/// One suggestion with the matched part of the query bracketed
pub fn suggestion_line(suggestion: &Suggestion, query: &str) -> String {
    let h = highlight(&suggestion.display_text, query);
    let text = if h.is_match() {
        format!("{}[{}]{}", h.before, h.matched, h.after)
    } else {
        h.before.to_string()
    };

    let marker = if suggestion.is_remote_search_phrase {
        "search"
    } else {
        "command"
    };
    match &suggestion.source_command_id {
        Some(id) => format!("{text}\t{marker}\t{id}"),
        None => format!("{text}\t{marker}"),
    }
}

pub fn grid_text(grid: &[CategoryGroup<'_>]) -> String {
    let mut out = String::new();
    for group in grid {
        let _ = writeln!(out, "{}", group.category.name);
        for command in &group.commands {
            let _ = write!(out, "  {:<18} {}", command.name, command.url);
            if !command.badge_aliases().is_empty() {
                let _ = write!(out, "  [{}]", command.badge_aliases().join(", "));
            }
            out.push('\n');
            if let Some(description) = &command.description {
                let _ = writeln!(out, "  {:<18} {}", "", description);
            }
        }
        out.push('\n');
    }
    out
}

pub fn grid_json(grid: &[CategoryGroup<'_>]) -> Value {
    Value::Array(
        grid.iter()
            .map(|group| {
                json!({
                    "key": group.category.key,
                    "name": group.category.name,
                    "commands": group.commands,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_core::CommandRegistry;

    #[test]
    fn test_suggestion_line() {
        let s = Suggestion::alias("ytm", "ytmusic");
        assert_eq!(suggestion_line(&s, "YT"), "[yt]m\tcommand\tytmusic");

        let s = Suggestion::remote("rust book".to_string(), None);
        assert_eq!(suggestion_line(&s, "zig"), "rust book\tsearch");
    }

    #[test]
    fn test_grid_output() {
        let registry = CommandRegistry::builtin().unwrap();
        let grid = registry.by_category();

        let text = grid_text(&grid);
        assert!(text.starts_with("AI & Chat\n"));
        assert!(text.contains("[gh, git]"));

        let value = grid_json(&grid);
        assert_eq!(value[0]["key"], "ai");
        assert_eq!(value[0]["commands"][0]["id"], "chatgpt");
    }
}
