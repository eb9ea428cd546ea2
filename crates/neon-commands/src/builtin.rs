//! Built-in command table

use crate::command::{Category, Command};

struct BuiltinCommand {
    id: &'static str,
    name: &'static str,
    url: &'static str,
    category: &'static str,
    description: &'static str,
    search_template: Option<&'static str>,
    keywords: &'static [&'static str],
    aliases: &'static [&'static str],
}

const CATEGORIES: &[(&str, &str)] = &[
    ("ai", "AI & Chat"),
    ("dev", "Development"),
    ("media", "Media"),
    ("tools", "Tools"),
    ("services", "Services"),
];

const COMMANDS: &[BuiltinCommand] = &[
    // AI & Chat
    BuiltinCommand {
        id: "chatgpt",
        name: "ChatGPT",
        url: "https://chat.openai.com",
        category: "ai",
        description: "OpenAI ChatGPT",
        search_template: None,
        keywords: &["ai", "chat", "gpt"],
        aliases: &["gpt", "ai"],
    },
    BuiltinCommand {
        id: "claude",
        name: "Claude",
        url: "https://claude.ai/new",
        category: "ai",
        description: "Anthropic Claude AI",
        search_template: None,
        keywords: &["ai", "claude"],
        aliases: &["cl"],
    },
    BuiltinCommand {
        id: "gemini",
        name: "Gemini",
        url: "https://gemini.google.com/app",
        category: "ai",
        description: "Google Gemini",
        search_template: None,
        keywords: &["ai", "google"],
        aliases: &["gem", "gg"],
    },
    BuiltinCommand {
        id: "perplexity",
        name: "Perplexity",
        url: "https://www.perplexity.ai",
        category: "ai",
        description: "AI search engine",
        search_template: Some("/search?q={}"),
        keywords: &["ai", "search"],
        aliases: &["perp", "pp"],
    },
    BuiltinCommand {
        id: "deepseek",
        name: "DeepSeek",
        url: "https://chat.deepseek.com/coder",
        category: "ai",
        description: "DeepSeek AI chat",
        search_template: None,
        keywords: &["ai", "coder"],
        aliases: &["ds", "deep"],
    },
    BuiltinCommand {
        id: "colab",
        name: "Google Colab",
        url: "https://colab.research.google.com",
        category: "ai",
        description: "Google Colaboratory",
        search_template: None,
        keywords: &["python", "notebook", "ml"],
        aliases: &["gc", "colab"],
    },
    // Development
    BuiltinCommand {
        id: "github",
        name: "GitHub",
        url: "https://github.com",
        category: "dev",
        description: "Code repository",
        search_template: Some("/search?q={}"),
        keywords: &["code", "git", "repos"],
        aliases: &["gh", "git"],
    },
    BuiltinCommand {
        id: "notion",
        name: "Notion",
        url: "https://notion.so",
        category: "dev",
        description: "Notes & documentation",
        search_template: None,
        keywords: &["notes", "docs"],
        aliases: &["note", "nt"],
    },
    BuiltinCommand {
        id: "clickup",
        name: "ClickUp",
        url: "https://app.clickup.com",
        category: "dev",
        description: "Project management",
        search_template: None,
        keywords: &["tasks", "projects", "management"],
        aliases: &["cu", "tasks"],
    },
    // Media
    BuiltinCommand {
        id: "youtube",
        name: "YouTube",
        url: "https://youtube.com",
        category: "media",
        description: "Video platform",
        search_template: Some("/results?search_query={}"),
        keywords: &["videos", "watch"],
        aliases: &["yt"],
    },
    BuiltinCommand {
        id: "youtubesubs",
        name: "YouTube Subs",
        url: "https://youtube.com/feed/subscriptions",
        category: "media",
        description: "YouTube subscriptions",
        search_template: None,
        keywords: &["subscriptions", "videos"],
        aliases: &["yts", "subs"],
    },
    BuiltinCommand {
        id: "ytmusic",
        name: "YouTube Music",
        url: "https://music.youtube.com",
        category: "media",
        description: "YouTube Music",
        search_template: Some("/search?q={}"),
        keywords: &["music", "songs"],
        aliases: &["ytm", "music"],
    },
    BuiltinCommand {
        id: "hianime",
        name: "HiAnime",
        url: "https://hianime.to",
        category: "media",
        description: "Anime streaming",
        search_template: Some("/search?keyword={}"),
        keywords: &["anime", "watch"],
        aliases: &["ha", "anime"],
    },
    BuiltinCommand {
        id: "nyaa",
        name: "Nyaa",
        url: "https://nyaa.si",
        category: "media",
        description: "Anime torrents",
        search_template: Some("/?q={}"),
        keywords: &["torrent", "anime"],
        aliases: &["ny", "torrent"],
    },
    BuiltinCommand {
        id: "bsky",
        name: "Bluesky",
        url: "https://bsky.app",
        category: "media",
        description: "Bluesky social",
        search_template: Some("/search?q={}"),
        keywords: &["social", "twitter"],
        aliases: &["bs", "sky"],
    },
    // Tools
    BuiltinCommand {
        id: "deepl",
        name: "DeepL",
        url: "https://deepl.com",
        category: "tools",
        description: "AI translation",
        search_template: None,
        keywords: &["translate", "language"],
        aliases: &["dl", "translate"],
    },
    BuiltinCommand {
        id: "googletranslate",
        name: "Google Translate",
        url: "https://translate.google.com",
        category: "tools",
        description: "Google translation",
        search_template: Some("/?sl=auto&tl=en&text={}"),
        keywords: &["translate", "google"],
        aliases: &["gt", "gtranslate"],
    },
    BuiltinCommand {
        id: "reddit",
        name: "Reddit",
        url: "https://reddit.com",
        category: "tools",
        description: "Social discussion",
        search_template: Some("/search/?q={}"),
        keywords: &["social", "forum"],
        aliases: &["rd", "r"],
    },
    BuiltinCommand {
        id: "duckduckgo",
        name: "DuckDuckGo",
        url: "https://duckduckgo.com",
        category: "tools",
        description: "Private search",
        search_template: Some("/?q={}"),
        keywords: &["search", "private"],
        aliases: &["ddg", "search"],
    },
    BuiltinCommand {
        id: "gmail",
        name: "Gmail",
        url: "https://mail.google.com",
        category: "tools",
        description: "Email",
        search_template: None,
        keywords: &["email", "mail"],
        aliases: &["gm", "mail"],
    },
    BuiltinCommand {
        id: "drive",
        name: "Google Drive",
        url: "https://drive.google.com",
        category: "tools",
        description: "Cloud storage",
        search_template: None,
        keywords: &["storage", "cloud"],
        aliases: &["gd", "drive"],
    },
    // Services
    BuiltinCommand {
        id: "port8080",
        name: "Port 8080",
        url: "http://localhost:8080",
        category: "services",
        description: "Local service",
        search_template: None,
        keywords: &["local", "service"],
        aliases: &["p8", "8080"],
    },
    BuiltinCommand {
        id: "localhost",
        name: "Local Dev",
        url: "http://localhost:3000",
        category: "services",
        description: "Development",
        search_template: None,
        keywords: &["dev", "local", "next"],
        aliases: &["dev", "local", "next"],
    },
];

pub(crate) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(key, name)| Category::new(*key, *name))
        .collect()
}

pub(crate) fn commands() -> Vec<Command> {
    COMMANDS
        .iter()
        .map(|c| {
            let mut command = Command::new(c.id, c.name, c.url)
                .with_category(c.category)
                .with_description(c.description)
                .with_keywords(c.keywords.iter().copied())
                .with_aliases(c.aliases.iter().copied());
            command.search_template = c.search_template.map(str::to_string);
            command
        })
        .collect()
}
