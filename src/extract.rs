//! Tag and wiki-link extraction from raw markdown.
//! Both are best-effort: text that does not match is ignored.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn tags_regex() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"tags:[ \t]*\[([^\]\n]+)\]").expect("valid tags regex"))
}

fn wiki_link_regex() -> &'static Regex {
    static WIKI_LINK: OnceLock<Regex> = OnceLock::new();
    WIKI_LINK.get_or_init(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid wiki link regex"))
}

/// Extracts the tags of a single-line bracketed list such as `tags: [a, "b"]`.
///
/// Multi-line YAML lists are not recognized.
pub fn extract_tags(content: &str) -> Vec<String> {
    let Some(caps) = tags_regex().captures(content) else {
        return Vec::new();
    };
    caps[1]
        .split(',')
        .map(|tag| tag.trim_matches(|c| c == ' ' || c == '"' || c == '\'').trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts every `[[...]]` reference, trimmed, in order of appearance.
pub fn extract_wiki_links(content: &str) -> Vec<String> {
    wiki_link_regex()
        .captures_iter(content)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Reduces a wiki-link to the base name of the note it points at.
///
/// `[[folder/Note.md#Heading|alias]]` refers to `Note`.
pub fn link_target(link: &str) -> String {
    let target = link.split('|').next().unwrap_or(link);
    let target = target.split('#').next().unwrap_or(target).trim();
    let name = target.rsplit(['/', '\\']).next().unwrap_or(target);
    let stripped = Path::new(name)
        .extension()
        .filter(|ext| ext.eq_ignore_ascii_case("md"))
        .map(|_| &name[..name.len() - 3]);
    stripped.unwrap_or(name).trim().to_string()
}
