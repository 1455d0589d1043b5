//! One function per vault task.
//! Every task receives the [`ProjectContext`] resolved once by the binary.

use crate::backup::{backup_to_git, BackupOutcome};
use crate::cleanup::{cleanup_temp_files, temp_file_patterns};
use crate::context::ProjectContext;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::report::{find_orphans, NetworkReport, TagCounts};
use crate::scaffold::{scaffold_lines, MiniJinjaRenderer, DAILY_NOTE, PROJECT_NOTE};
use crate::snippets::SnippetStore;
use crate::template::generate_content;
use crate::ui;
use crate::vault::{create_note, format_age, list_inbox, open_in_editor, read_notes};
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

fn open_note(ctx: &ProjectContext, path: &Path) {
    if !ctx.config.open_in_editor {
        return;
    }
    if let Err(e) = open_in_editor(&ctx.config.editor_command, path) {
        ui::error(&format!("Could not open {}: {}", path.display(), e));
    }
}

/// Creates today's note in the inbox unless it already exists, then opens it.
pub fn daily_note(ctx: &ProjectContext, prompter: &dyn Prompter) -> Result<PathBuf> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let path = ctx.inbox_dir().join(format!("{today}.md"));

    if path.exists() {
        ui::warning(&format!("Daily note already exists: {}", ctx.relative(&path).display()));
    } else {
        let lines = match &ctx.config.daily_template {
            Some(prefix) => {
                let store = SnippetStore::load(ctx.snippets_file())?;
                generate_content(&store, prefix, None, prompter)?
            }
            None => scaffold_lines(
                &MiniJinjaRenderer::new(),
                DAILY_NOTE,
                &serde_json::json!({ "date": today }),
            )?,
        };
        create_note(&path, &lines)?;
        ui::success(&format!("Created daily note: {}", ctx.relative(&path).display()));
    }

    open_note(ctx, &path);
    Ok(path)
}

/// Validates a project name for use as a folder name.
pub fn validate_project_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::ValidationError("project name must not be empty".to_string()));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::ValidationError(format!(
            "project name '{name}' must be a single folder name"
        )));
    }
    Ok(name)
}

/// Scaffolds `Projects/<name>/index.md`, asking for the name when not given.
///
/// Returns `None` when the name prompt was dismissed.
pub fn create_project(
    ctx: &ProjectContext,
    prompter: &dyn Prompter,
    name: Option<String>,
) -> Result<Option<PathBuf>> {
    let name = match name {
        Some(name) => name,
        None => match prompter.ask("Project name")? {
            Some(name) => name,
            None => {
                ui::warning("Project creation cancelled");
                return Ok(None);
            }
        },
    };
    let name = validate_project_name(&name)?;

    let index = ctx.projects_dir().join(name).join("index.md");
    if index.exists() {
        ui::warning(&format!("Project already exists: {}", ctx.relative(&index).display()));
    } else {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let lines = scaffold_lines(
            &MiniJinjaRenderer::new(),
            PROJECT_NOTE,
            &serde_json::json!({ "name": name, "date": today }),
        )?;
        create_note(&index, &lines)?;
        let folder = index.parent().unwrap_or(&index);
        ui::success(&format!("Created project: {}", ctx.relative(folder).display()));
    }

    open_note(ctx, &index);
    Ok(Some(index))
}

/// Renders the snippet registered under `prefix`.
///
/// The content is written to `output` (relative to the root) when given and
/// printed otherwise.
pub fn render_template(
    ctx: &ProjectContext,
    prompter: &dyn Prompter,
    prefix: &str,
    provided: &IndexMap<String, String>,
    output: Option<&Path>,
    force: bool,
) -> Result<Vec<String>> {
    let target = output.map(|path| ctx.root.join(path));
    if let Some(target) = &target {
        if target.exists() && !force {
            return Err(Error::ValidationError(format!(
                "'{}' already exists, use --force to overwrite it",
                ctx.relative(target).display()
            )));
        }
    }

    let store = SnippetStore::load(ctx.snippets_file())?;
    let provided = (!provided.is_empty()).then_some(provided);
    let lines = generate_content(&store, prefix, provided, prompter)?;

    match &target {
        Some(target) => {
            create_note(target, &lines)?;
            ui::success(&format!("Created note: {}", ctx.relative(target).display()));
            open_note(ctx, target);
        }
        None => println!("{}", lines.join("\n")),
    }
    Ok(lines)
}

/// Prints every template prefix with its description.
pub fn list_templates(ctx: &ProjectContext) -> Result<()> {
    let store = SnippetStore::load(ctx.snippets_file())?;
    ui::header("Available templates:");
    let templates = store.templates();
    if templates.is_empty() {
        ui::item("no templates defined");
    }
    for (prefix, description) in templates {
        ui::highlight(&format!("{prefix}: {description}"));
    }
    Ok(())
}

/// Commits the vault to git.
pub fn backup(ctx: &ProjectContext) -> Result<BackupOutcome> {
    let outcome = backup_to_git(&ctx.root, &Local::now())?;
    match &outcome {
        BackupOutcome::Committed { message, has_remote, .. } => {
            ui::success(&format!("Backed up to git ({message})"));
            if *has_remote {
                ui::info("A remote is configured, run 'git push' to publish the backup");
            }
        }
        BackupOutcome::NothingToCommit => ui::warning("No changes to commit"),
    }
    Ok(outcome)
}

/// Deletes temp files and empty cache directories.
pub fn cleanup(ctx: &ProjectContext) -> Result<usize> {
    ui::header("Cleaning temp files...");
    let patterns = temp_file_patterns(&ctx.config.temp_patterns)?;
    let summary = cleanup_temp_files(&ctx.root, &patterns);

    for path in &summary.removed {
        ui::item(&format!("removed {}", ctx.relative(path).display()));
    }
    for (path, reason) in &summary.failed {
        ui::error(&format!("could not remove {}: {}", ctx.relative(path).display(), reason));
    }
    ui::success(&format!("Cleanup finished, removed {} file(s)/folder(s)", summary.removed.len()));
    Ok(summary.removed.len())
}

/// Prints how often each tag is used.
pub fn tag_statistics(ctx: &ProjectContext) -> Result<TagCounts> {
    ui::header("Tag usage:");
    let notes = read_notes(&ctx.root, &ctx.config.exclude_dirs);
    if notes.is_empty() {
        ui::item("no markdown files found");
        return Ok(TagCounts::default());
    }

    let counts = TagCounts::from_notes(&notes);
    if counts.is_empty() {
        ui::item("no tags found");
        return Ok(counts);
    }
    for (tag, count) in counts.most_common() {
        ui::highlight(&format!("#{tag}: {count}"));
    }
    ui::info(&format!(
        "{} different tag(s), used {} time(s) in total",
        counts.distinct(),
        counts.total()
    ));
    Ok(counts)
}

/// Prints the notes that no other note links to.
pub fn orphaned_notes(ctx: &ProjectContext) -> Result<Vec<PathBuf>> {
    ui::header("Orphaned notes (not linked from any note):");
    let notes = read_notes(&ctx.root, &ctx.config.exclude_dirs);
    if notes.is_empty() {
        ui::item("no markdown files found");
        return Ok(Vec::new());
    }

    let orphans = find_orphans(&notes);
    if orphans.is_empty() {
        ui::success("No orphaned notes");
    } else {
        for note in &orphans {
            ui::highlight(&note.file_name());
        }
        ui::warning(&format!("Found {} orphaned note(s)", orphans.len()));
    }
    Ok(orphans.into_iter().map(|note| note.path.clone()).collect())
}

/// Prints link statistics and the connectivity of the notes.
pub fn network_report(ctx: &ProjectContext) -> Result<NetworkReport> {
    ui::header("Knowledge network:");
    let notes = read_notes(&ctx.root, &ctx.config.exclude_dirs);
    if notes.is_empty() {
        ui::item("no markdown files found");
        return Ok(NetworkReport::default());
    }

    let report = NetworkReport::from_notes(&notes);
    ui::info(&format!("Notes: {}", report.total_notes));
    ui::info(&format!("Links: {}", report.total_links));
    ui::info(&format!("Links per note: {}", report.average_links()));

    ui::header("Most linked notes:");
    let top = report.top_notes(ctx.config.top_notes);
    if top.is_empty() {
        ui::item("no links found");
    }
    for (note, count) in top {
        ui::highlight(&format!("{note}: linked {count} time(s)"));
    }

    let unresolved = report.unresolved_targets(&notes);
    if !unresolved.is_empty() {
        ui::warning(&format!("Links to missing notes: {}", unresolved.join(", ")));
    }

    ui::info(&format!(
        "Connectivity: {:.1}% ({}/{} notes linked)",
        report.connectivity(),
        report.linked_notes,
        report.total_notes
    ));
    if report.orphan_count() > 0 {
        ui::warning(&format!("Orphaned notes: {}", report.orphan_count()));
    }
    ui::info(&format!("Network health: {}", report.health().advice()));
    Ok(report)
}

/// Lists the inbox, newest first.
pub fn inbox_overview(ctx: &ProjectContext) -> Result<usize> {
    ui::header("Inbox:");
    let notes = list_inbox(ctx.inbox_dir())?;
    if notes.is_empty() {
        ui::item("inbox is empty");
    }
    let now = Local::now();
    for (path, modified) in &notes {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let age = format_age(DateTime::<Local>::from(*modified), now);
        ui::highlight(&format!("{name} ({age})"));
    }
    ui::info("Tip: file inbox notes into literature or permanent notes regularly");
    Ok(notes.len())
}
