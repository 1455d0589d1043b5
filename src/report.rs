//! Tag and link statistics across the notes of a vault.
//! Everything here is recomputed from the notes on each run.

use crate::extract::link_target;
use crate::vault::NoteFile;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Sorts counts by descending frequency; ties keep first-seen order.
fn most_common(counts: &IndexMap<String, usize>) -> Vec<(&str, usize)> {
    let mut sorted: Vec<(&str, usize)> =
        counts.iter().map(|(key, count)| (key.as_str(), *count)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// How often each tag is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts {
    counts: IndexMap<String, usize>,
    total: usize,
}

impl TagCounts {
    pub fn from_notes(notes: &[NoteFile]) -> Self {
        let mut counts = Self::default();
        for tag in notes.iter().flat_map(|note| &note.tags) {
            *counts.counts.entry(tag.clone()).or_insert(0) += 1;
            counts.total += 1;
        }
        counts
    }

    pub fn most_common(&self) -> Vec<(&str, usize)> {
        most_common(&self.counts)
    }

    pub fn get(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Number of different tags
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of tag uses across all notes
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Rating of how well the notes are linked together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkHealth {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl NetworkHealth {
    pub fn from_connectivity(percent: f64) -> Self {
        if percent >= 80.0 {
            NetworkHealth::Excellent
        } else if percent >= 60.0 {
            NetworkHealth::Good
        } else if percent >= 40.0 {
            NetworkHealth::Fair
        } else {
            NetworkHealth::Poor
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            NetworkHealth::Excellent => "excellent, notes are tightly connected",
            NetworkHealth::Good => "good, consider adding more links",
            NetworkHealth::Fair => "fair, notes need stronger connections",
            NetworkHealth::Poor => "poor, consider reorganizing the note structure",
        }
    }
}

/// Link connectivity of a set of notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkReport {
    pub total_notes: usize,
    pub total_links: usize,
    /// Incoming link count per target note name
    pub backlinks: IndexMap<String, usize>,
    /// Notes whose name is the target of at least one link
    pub linked_notes: usize,
}

impl NetworkReport {
    /// Aggregates the wiki links of `notes`.
    ///
    /// # Arguments
    /// * `notes` - Every note of the vault
    ///
    /// # Returns
    /// * `NetworkReport` - Link totals with backlinks keyed by normalized target
    pub fn from_notes(notes: &[NoteFile]) -> Self {
        let mut backlinks: IndexMap<String, usize> = IndexMap::new();
        let mut total_links = 0;
        for link in notes.iter().flat_map(|note| &note.links) {
            *backlinks.entry(link_target(link)).or_insert(0) += 1;
            total_links += 1;
        }
        let linked_notes =
            notes.iter().filter(|note| backlinks.contains_key(&note.name)).count();

        Self { total_notes: notes.len(), total_links, backlinks, linked_notes }
    }

    pub fn orphan_count(&self) -> usize {
        self.total_notes - self.linked_notes
    }

    /// Links per note, rounded to two decimals.
    pub fn average_links(&self) -> f64 {
        if self.total_notes == 0 {
            return 0.0;
        }
        round_to(self.total_links as f64 / self.total_notes as f64, 2)
    }

    /// Share of notes that are linked to, as a percentage rounded to one decimal.
    pub fn connectivity(&self) -> f64 {
        if self.total_notes == 0 {
            return 0.0;
        }
        round_to(self.linked_notes as f64 / self.total_notes as f64 * 100.0, 1)
    }

    pub fn health(&self) -> NetworkHealth {
        NetworkHealth::from_connectivity(self.connectivity())
    }

    /// The `limit` most linked-to targets.
    pub fn top_notes(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut top = most_common(&self.backlinks);
        top.truncate(limit);
        top
    }

    /// Link targets that match no note, in first-seen order.
    pub fn unresolved_targets<'a>(&'a self, notes: &[NoteFile]) -> Vec<&'a str> {
        let names: HashSet<&str> = notes.iter().map(|note| note.name.as_str()).collect();
        self.backlinks
            .keys()
            .map(String::as_str)
            .filter(|target| !names.contains(target))
            .collect()
    }
}

/// Notes no other note links to, sorted by file name.
///
/// # Arguments
/// * `notes` - Every note of the vault, as read by `vault::read_notes`
///
/// # Returns
/// * `Vec<&NoteFile>` - Notes whose name is never a link target
pub fn find_orphans(notes: &[NoteFile]) -> Vec<&NoteFile> {
    let targets: HashSet<String> = notes
        .iter()
        .flat_map(|note| &note.links)
        .map(|link| link_target(link))
        .collect();
    let mut orphans: Vec<&NoteFile> =
        notes.iter().filter(|note| !targets.contains(&note.name)).collect();
    orphans.sort_by_key(|note| note.file_name());
    orphans
}
