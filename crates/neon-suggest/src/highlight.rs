//! Query highlighting for rendered suggestions

use regex::RegexBuilder;
use serde::Serialize;

/// A suggestion's text split around the first case-insensitive match of the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

impl Highlight<'_> {
    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Locate `query` in `text`; without a match the whole text is `before`
pub fn highlight<'a>(text: &'a str, query: &str) -> Highlight<'a> {
    match find_ignore_case(text, query.trim()) {
        Some((start, end)) => Highlight {
            before: &text[..start],
            matched: &text[start..end],
            after: &text[end..],
        },
        None => Highlight {
            before: text,
            matched: "",
            after: "",
        },
    }
}

fn find_ignore_case(text: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    let re = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .ok()?;
    re.find(text).map(|m| (m.start(), m.end()))
}
