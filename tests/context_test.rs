use notekit::config::VaultConfig;
use notekit::context::{find_project_root, ProjectContext};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_root_is_nearest_marker_dir() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".vscode")).unwrap();
    let nested = root.join("ZK/10-Literature");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_project_root(&nested), root);
    assert_eq!(find_project_root(root), root);
}

#[test]
fn test_root_falls_back_to_start() {
    let temp_dir = TempDir::new().unwrap();
    let start = temp_dir.path().join("a/b");
    fs::create_dir_all(&start).unwrap();

    // Only holds when no ancestor of the temp dir has a .vscode directory.
    if start.ancestors().all(|dir| !dir.join(".vscode").is_dir()) {
        assert_eq!(find_project_root(&start), start);
    }
}

#[test]
fn test_discover_loads_config() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".vscode")).unwrap();
    fs::write(root.join(".vscode/notekit.yaml"), "inbox_dir: Inbox\n").unwrap();

    let ctx = ProjectContext::discover(root).unwrap();

    assert_eq!(ctx.root, root);
    assert_eq!(ctx.inbox_dir(), root.join("Inbox"));
    assert_eq!(ctx.projects_dir(), root.join("Projects"));
    assert_eq!(ctx.snippets_file(), root.join(".vscode/markdown.code-snippets"));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".vscode")).unwrap();
    fs::write(root.join(".vscode/notekit.json"), "{\"top_notes\": \"many\"}").unwrap();

    assert!(ProjectContext::discover(root).is_err());
}

#[test]
fn test_relative_paths() {
    let ctx = ProjectContext::with_config("/vault", VaultConfig::default());
    assert_eq!(ctx.relative(&PathBuf::from("/vault/ZK/a.md")), PathBuf::from("ZK/a.md"));
    assert_eq!(ctx.relative(&PathBuf::from("/elsewhere/a.md")), PathBuf::from("/elsewhere/a.md"));
}
