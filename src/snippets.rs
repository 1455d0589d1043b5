//! VS Code snippet definitions used as note templates.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Snippet fields that VS Code accepts either as a string or as a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct Lines(pub Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Lines {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) => Lines(s.lines().map(str::to_string).collect()),
            OneOrMany::Many(v) => Lines(v),
        }
    }
}

/// A single snippet definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub prefix: Lines,
    #[serde(default)]
    pub body: Lines,
    pub description: Option<String>,
}

impl Snippet {
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefix.0.iter().any(|p| p == prefix)
    }

    pub fn body(&self) -> &[String] {
        &self.body.0
    }
}

/// Snippets of a `.code-snippets` file, in file order.
#[derive(Debug, Clone, Default)]
pub struct SnippetStore {
    snippets: IndexMap<String, Snippet>,
}

/// Drops whole-line `//` comments, which VS Code allows in snippet files.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl SnippetStore {
    pub fn from_json(content: &str) -> Result<Self> {
        let snippets = serde_json::from_str(&strip_line_comments(content))?;
        Ok(Self { snippets })
    }

    /// Loads the snippet file at `path`.
    ///
    /// # Errors
    /// * `Error::SnippetStoreNotFound` if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::SnippetStoreNotFound { path: path.display().to_string() });
        }
        debug!("Loading snippets from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Returns the first snippet declaring `prefix`.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<&Snippet> {
        self.snippets
            .values()
            .find(|snippet| snippet.has_prefix(prefix))
            .ok_or_else(|| Error::MissingTemplate { prefix: prefix.to_string() })
    }

    /// Every prefix with its description, falling back to the snippet name.
    pub fn templates(&self) -> Vec<(String, String)> {
        self.snippets
            .iter()
            .flat_map(|(name, snippet)| {
                let description = snippet.description.clone().unwrap_or_else(|| name.clone());
                snippet.prefix.0.iter().map(move |p| (p.clone(), description.clone()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
