//! Common constants used throughout notekit.

/// Directory whose presence marks the vault root
pub const MARKER_DIR: &str = ".vscode";

/// Supported configuration file names, looked up inside [`MARKER_DIR`]
pub const CONFIG_FILES: [&str; 3] = ["notekit.json", "notekit.yml", "notekit.yaml"];

/// Snippet definitions, relative to the vault root
pub const SNIPPETS_FILE: &str = ".vscode/markdown.code-snippets";

pub const INBOX_DIR: &str = "ZK/00-Inbox";

pub const PROJECTS_DIR: &str = "Projects";

/// Directories skipped when collecting notes
pub const EXCLUDE_DIRS: [&str; 3] = ["Assets", ".git", ".vscode"];

/// File name globs removed by `notekit cleanup`
pub const TEMP_PATTERNS: [&str; 8] =
    ["*.tmp", "*.bak", "*~", "Thumbs.db", ".DS_Store", "*.swp", "*.swo", ".tmp*"];

/// Cache directories removed by `notekit cleanup` once empty
pub const CACHE_DIR: &str = "__pycache__";

pub const MARKDOWN_EXTENSION: &str = "md";

/// Reserved terminal marker of a snippet body
pub const TERMINAL_MARKER: &str = "$0";
