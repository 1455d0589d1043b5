//! Commits the whole vault to its git repository.

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use git2::{IndexAddOption, Repository, Signature};
use log::debug;
use std::path::Path;

/// Result of a backup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    Committed {
        id: String,
        message: String,
        /// The repository has a remote the backup could be pushed to
        has_remote: bool,
    },
    NothingToCommit,
}

pub fn backup_message(now: &DateTime<Local>) -> String {
    format!("Backup: {}", now.format("%Y-%m-%d %H:%M"))
}

fn signature(repo: &Repository) -> Result<Signature<'static>> {
    match repo.signature() {
        Ok(signature) => Ok(signature),
        Err(e) => {
            debug!("No git identity configured ({}), using the notekit identity", e);
            Ok(Signature::now("notekit", "notekit@localhost")?)
        }
    }
}

/// Stages every change under `root` (like `git add .`) and commits it.
///
/// # Errors
/// * `Error::NotAGitRepository` if `root` has no `.git` directory
pub fn backup_to_git<P: AsRef<Path>>(root: P, now: &DateTime<Local>) -> Result<BackupOutcome> {
    let root = root.as_ref();
    if !root.join(".git").exists() {
        return Err(Error::NotAGitRepository { root: root.display().to_string() });
    }
    let repo = Repository::open(root)?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.update_all(["*"].iter(), None)?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) => return Err(e.into()),
    };
    let unchanged = match &parent {
        Some(parent) => parent.tree_id() == tree_id,
        None => tree.is_empty(),
    };
    if unchanged {
        debug!("Index matches HEAD, nothing to commit");
        return Ok(BackupOutcome::NothingToCommit);
    }

    let signature = signature(&repo)?;
    let message = backup_message(now);
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    let id = repo.commit(Some("HEAD"), &signature, &signature, &message, &tree, &parents)?;
    debug!("Committed {}", id);

    let has_remote = !repo.remotes()?.is_empty();
    Ok(BackupOutcome::Committed { id: id.to_string(), message, has_remote })
}
