//! notekit is a set of helper tasks for a markdown note vault.
//! It creates dated and project notes, renders VS Code snippet templates into
//! notes, backs the vault up to git and reports on tags and links.

/// Git backup of the whole vault
pub mod backup;

/// Temp file removal
pub mod cleanup;

/// Command-line interface module for the notekit binary
pub mod cli;

/// Placeholder value resolution
pub mod collect;

/// One function per task, as dispatched by the binary
pub mod commands;

/// Vault configuration (notekit.json, notekit.yml, notekit.yaml)
pub mod config;

pub mod constants;

/// Vault root discovery
pub mod context;

/// Error types and handling for notekit
pub mod error;

/// Tag and wiki-link extraction
pub mod extract;

pub mod logger;

/// Snippet placeholder grammar and scanner
pub mod placeholder;

/// User input and interaction handling
pub mod prompt;

/// Snippet body rendering
pub mod render;

/// Tag frequency and link connectivity reports
pub mod report;

/// Built-in note scaffolds
pub mod scaffold;

/// VS Code snippet store
pub mod snippets;

/// Note generation from snippet templates
pub mod template;

pub mod ui;

/// Markdown file discovery and note creation
pub mod vault;
