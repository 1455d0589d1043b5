//! Removal of temp files and empty cache directories from a vault.

use crate::constants::CACHE_DIR;
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Compiles temp-file name patterns such as `*.swp` into a set matched
/// against file names.
pub fn temp_file_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern.as_ref())?);
    }
    Ok(builder.build()?)
}

/// What a cleanup run removed or failed to remove.
#[derive(Debug, Default)]
pub struct CleanupSummary {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl CleanupSummary {
    fn record(&mut self, path: PathBuf, outcome: std::io::Result<()>) {
        match outcome {
            Ok(()) => {
                debug!("Removed {}", path.display());
                self.removed.push(path);
            }
            Err(e) => {
                warn!("Could not remove {}: {}", path.display(), e);
                self.failed.push((path, e.to_string()));
            }
        }
    }
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).map(|mut entries| entries.next().is_none()).unwrap_or(false)
}

/// Deletes files whose name matches `patterns`, then every `__pycache__`
/// directory left empty. Nothing inside `.git` is touched.
///
/// A file that cannot be deleted is recorded in the summary and the run goes on.
pub fn cleanup_temp_files<P: AsRef<Path>>(root: P, patterns: &GlobSet) -> CleanupSummary {
    let mut temp_files = Vec::new();
    let mut cache_dirs = Vec::new();

    let walker = WalkDir::new(root.as_ref())
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != ".git");
    for entry in walker.filter_map(|entry| entry.ok()) {
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_dir() {
            if entry.file_name() == CACHE_DIR {
                cache_dirs.push(entry.into_path());
            }
        } else if patterns.is_match(entry.file_name()) {
            temp_files.push(entry.into_path());
        }
    }

    let mut summary = CleanupSummary::default();
    for path in temp_files {
        let outcome = fs::remove_file(&path);
        summary.record(path, outcome);
    }
    for dir in cache_dirs.into_iter().filter(|dir| is_empty_dir(dir)) {
        let outcome = fs::remove_dir(&dir);
        summary.record(dir, outcome);
    }
    summary
}
