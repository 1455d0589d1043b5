//! Error handling for notekit.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while running a vault task.
///
/// Malformed markdown never produces an error: tag and link extraction is
/// best-effort and simply does not match. Per-file read failures during report
/// aggregation are logged and skipped by the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The snippet store or a config file is not valid JSON
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// A YAML config file could not be parsed
    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Errors reported by libgit2 while backing up the vault
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// A built-in note scaffold failed to render
    #[error("Scaffold rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A temp-file pattern is not a valid glob
    #[error("Invalid pattern: {0}.")]
    GlobError(#[from] globset::Error),

    /// No snippet in the store has the requested prefix
    #[error("No template found with prefix '{prefix}'.")]
    MissingTemplate { prefix: String },

    /// The snippet definition file does not exist
    #[error("Snippet file does not exist: '{path}'.")]
    SnippetStoreNotFound { path: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The terminal could not be used for an interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The project root is not a git repository
    #[error("No git repository found in '{root}', run 'git init' first.")]
    NotAGitRepository { root: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits the process with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", crate::ui::error_line(&err.to_string()));
    std::process::exit(1);
}
