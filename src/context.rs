//! Vault root discovery.
//! The root is resolved once by the binary and handed to every task.

use crate::config::{get_config, VaultConfig};
use crate::constants::MARKER_DIR;
use crate::error::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// The vault a task operates on.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: VaultConfig,
}

impl ProjectContext {
    /// Builds a context for an already known root, loading its configuration.
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        let config = get_config(&root)?;
        Ok(Self { root, config })
    }

    pub fn with_config<P: Into<PathBuf>>(root: P, config: VaultConfig) -> Self {
        Self { root: root.into(), config }
    }

    /// Walks upward from `start` to the nearest directory containing `.vscode`.
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        Self::new(find_project_root(start))
    }

    pub fn inbox_dir(&self) -> PathBuf {
        self.root.join(&self.config.inbox_dir)
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.root.join(&self.config.projects_dir)
    }

    pub fn snippets_file(&self) -> PathBuf {
        self.root.join(&self.config.snippets_file)
    }

    /// `path` relative to the root when it lies inside it.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Returns the nearest ancestor of `start` (itself included) holding a
/// `.vscode` directory, or `start` when there is none.
pub fn find_project_root<P: AsRef<Path>>(start: P) -> PathBuf {
    let start = start.as_ref();
    for dir in start.ancestors() {
        if dir.join(MARKER_DIR).is_dir() {
            debug!("Found vault root at {}", dir.display());
            return dir.to_path_buf();
        }
    }
    debug!("No {} directory above {}, using it as root", MARKER_DIR, start.display());
    start.to_path_buf()
}
