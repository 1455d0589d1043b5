//! Configuration handling for a note vault.
//! The config file is optional; every field falls back to the layout the
//! vault tasks have always assumed.

use crate::constants::{
    CONFIG_FILES, EXCLUDE_DIRS, INBOX_DIR, MARKER_DIR, PROJECTS_DIR, SNIPPETS_FILE,
    TEMP_PATTERNS,
};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Vault layout and task settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaultConfig {
    /// Inbox folder where daily notes land, relative to the root
    pub inbox_dir: PathBuf,
    /// Folder holding one sub-folder per project, relative to the root
    pub projects_dir: PathBuf,
    /// Directory names skipped anywhere in the tree when collecting notes
    pub exclude_dirs: Vec<String>,
    /// File name globs deleted by the cleanup task
    pub temp_patterns: Vec<String>,
    /// Snippet definitions, relative to the root
    pub snippets_file: PathBuf,
    /// How many notes the network report lists as most linked
    pub top_notes: usize,
    /// Open created notes in the editor
    pub open_in_editor: bool,
    pub editor_command: String,
    /// Snippet prefix rendered for new daily notes instead of the built-in scaffold
    pub daily_template: Option<String>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            inbox_dir: PathBuf::from(INBOX_DIR),
            projects_dir: PathBuf::from(PROJECTS_DIR),
            exclude_dirs: EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            temp_patterns: TEMP_PATTERNS.iter().map(|s| s.to_string()).collect(),
            snippets_file: PathBuf::from(SNIPPETS_FILE),
            top_notes: 5,
            open_in_editor: true,
            editor_command: "code".to_string(),
            daily_template: None,
        }
    }
}

/// Reads the first configuration file found in `<root>/.vscode`.
///
/// # Returns
/// * `Ok(None)` when the vault has no configuration file
pub fn load_config<P: AsRef<Path>>(root: P, config_files: &[&str]) -> Result<Option<String>> {
    let config_dir = root.as_ref().join(MARKER_DIR);
    for file in config_files {
        let config_path = config_dir.join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<VaultConfig> {
    if content.trim().is_empty() {
        return Ok(VaultConfig::default());
    }
    let config: VaultConfig = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content)?,
    };
    config.validate()?;
    Ok(config)
}

/// Loads the vault configuration, falling back to defaults when none exists.
pub fn get_config<P: AsRef<Path>>(root: P) -> Result<VaultConfig> {
    match load_config(root, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(VaultConfig::default()),
    }
}

impl VaultConfig {
    fn validate(&self) -> Result<()> {
        if self.editor_command.trim().is_empty() {
            return Err(Error::ConfigError("editor_command must not be empty".to_string()));
        }
        if self.inbox_dir.is_absolute() || self.projects_dir.is_absolute() {
            return Err(Error::ConfigError(
                "inbox_dir and projects_dir must be relative to the vault root".to_string(),
            ));
        }
        Ok(())
    }
}
