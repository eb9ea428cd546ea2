//! URL shape detection and template formatting

use regex::Regex;
use std::sync::LazyLock;

use neon_commands::SEARCH_PLACEHOLDER;

static PROTOCOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+://").expect("protocol pattern compiles")
});

// Optional http(s) scheme, dotted host, optional trailing dot, port and path
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?[a-z0-9_-]+(\.[a-z0-9_-]+)+\.?(:[0-9]+)?(/\S*)?$")
        .expect("url pattern compiles")
});

/// Whether the input starts with a `scheme://` prefix
pub fn has_protocol(input: &str) -> bool {
    PROTOCOL_RE.is_match(input)
}

/// Whether the input has the shape of a web address (host with at least one dot)
pub fn is_url(input: &str) -> bool {
    URL_RE.is_match(input)
}

/// Substitute the percent-encoded term into every placeholder of `template`
pub fn format_search_url(template: &str, term: &str) -> String {
    template.replace(SEARCH_PLACEHOLDER, &encode_component(term))
}

/// Percent-encode each `/`-separated segment of a path, keeping the separators
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode a URL component, leaving `!'()*` literal as browsers do
fn encode_component(component: &str) -> String {
    let encoded = urlencoding::encode(component);
    if !encoded.contains('%') {
        return encoded.into_owned();
    }
    encoded
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
