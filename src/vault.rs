//! File-level helpers for the notes of a vault.

use crate::constants::MARKDOWN_EXTENSION;
use crate::error::{Error, Result};
use crate::extract::{extract_tags, extract_wiki_links};
use chrono::{DateTime, Local};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

/// What the reports need to know about one markdown note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub path: PathBuf,
    /// File name without extension; the name other notes link to
    pub name: String,
    pub tags: Vec<String>,
    pub links: Vec<String>,
}

impl NoteFile {
    pub fn from_content<P: Into<PathBuf>>(path: P, content: &str) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name, tags: extract_tags(content), links: extract_wiki_links(content) }
    }

    pub fn file_name(&self) -> String {
        self.path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
    }
}

fn is_excluded(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && exclude_dirs.iter().any(|dir| entry.file_name() == dir.as_str())
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

/// Lists every markdown file below `root`, skipping excluded directories.
pub fn find_markdown_files<P: AsRef<Path>>(root: P, exclude_dirs: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root.as_ref())
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, exclude_dirs))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_markdown(entry.path()))
        .map(DirEntry::into_path)
        .collect();
    files.sort();
    files
}

/// Reads every markdown note below `root`.
///
/// A note that cannot be read is logged and left out; it never aborts the scan.
///
/// # Arguments
/// * `root` - Vault root to walk
/// * `exclude_dirs` - Directory names skipped at any depth
///
/// # Returns
/// * `Vec<NoteFile>` - Parsed notes in path order
pub fn read_notes<P: AsRef<Path>>(root: P, exclude_dirs: &[String]) -> Vec<NoteFile> {
    find_markdown_files(root, exclude_dirs)
        .into_iter()
        .filter_map(|path| match fs::read_to_string(&path) {
            Ok(content) => Some(NoteFile::from_content(path, &content)),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect()
}

/// Writes `lines` joined by newlines to `path`, creating parent directories.
///
/// # Arguments
/// * `path` - Destination of the note; an existing file is overwritten
/// * `lines` - Note content, one entry per line
///
/// # Errors
/// * `Error::IoError` if a directory or the file cannot be written
pub fn create_note<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = lines.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join("\n");
    debug!("Writing note: {}", path.display());
    fs::write(path, content)?;
    Ok(())
}

/// Describes how long ago `modified` was, relative to `now`.
pub fn format_age(modified: DateTime<Local>, now: DateTime<Local>) -> String {
    let age = now.signed_duration_since(modified);
    match (age.num_days(), age.num_hours()) {
        (1, _) => "1 day ago".to_string(),
        (days, _) if days > 1 => format!("{days} days ago"),
        (_, 1) => "1 hour ago".to_string(),
        (_, hours) if hours > 1 => format!("{hours} hours ago"),
        _ => "today".to_string(),
    }
}

/// Markdown files directly inside `dir`, most recently modified first.
///
/// # Arguments
/// * `dir` - Inbox directory; a missing directory yields an empty list
///
/// # Returns
/// * `Result<Vec<(PathBuf, SystemTime)>>` - Each note with its modification time
///
/// # Errors
/// * `Error::IoError` if the directory or a file's metadata cannot be read
pub fn list_inbox<P: AsRef<Path>>(dir: P) -> Result<Vec<(PathBuf, SystemTime)>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut notes = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_markdown(&path) {
            let modified = fs::metadata(&path)?.modified()?;
            notes.push((path, modified));
        }
    }
    notes.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(notes)
}

/// Opens `path` in the running editor window.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Opening {} with {}", path.display(), editor);
    let status = Command::new(editor).arg("--reuse-window").arg(path).status()?;
    if !status.success() {
        return Err(Error::ValidationError(format!(
            "'{editor}' could not open '{}' ({status})",
            path.display()
        )));
    }
    Ok(())
}
