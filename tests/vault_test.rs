use chrono::{Duration, Local};
use notekit::vault::{create_note, find_markdown_files, format_age, list_inbox, read_notes};
use std::fs;
use tempfile::TempDir;

fn exclude() -> Vec<String> {
    vec!["Assets".to_string(), ".git".to_string(), ".vscode".to_string()]
}

#[test]
fn test_find_markdown_files_skips_excluded_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_note(root.join("ZK/00-Inbox/a.md"), &["# a"]).unwrap();
    create_note(root.join("Projects/p/index.md"), &["# p"]).unwrap();
    create_note(root.join("Assets/readme.md"), &["skip"]).unwrap();
    create_note(root.join(".vscode/notes.md"), &["skip"]).unwrap();
    create_note(root.join("ZK/image.png"), &["binary"]).unwrap();

    let files = find_markdown_files(root, &exclude());

    assert_eq!(
        files,
        vec![root.join("Projects/p/index.md"), root.join("ZK/00-Inbox/a.md")]
    );
}

#[test_log::test]
fn test_read_notes_extracts_tags_and_links() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_note(root.join("a.md"), &["tags: [one]", "See [[b]]"]).unwrap();
    fs::write(root.join("bad.md"), b"\xff\xfe\x00").unwrap();

    let notes = read_notes(root, &exclude());

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].name, "a");
    assert_eq!(notes[0].tags, vec!["one"]);
    assert_eq!(notes[0].links, vec!["b"]);
}

#[test]
fn test_create_note_joins_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/dir/note.md");

    create_note(&path, &["# Title", "", "body"]).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "# Title\n\nbody");
}

#[test]
fn test_format_age() {
    let now = Local::now();
    assert_eq!(format_age(now - Duration::minutes(30), now), "today");
    assert_eq!(format_age(now - Duration::hours(1), now), "1 hour ago");
    assert_eq!(format_age(now - Duration::hours(5), now), "5 hours ago");
    assert_eq!(format_age(now - Duration::days(1), now), "1 day ago");
    assert_eq!(format_age(now - Duration::days(3), now), "3 days ago");
}

#[test]
fn test_list_inbox() {
    let temp_dir = TempDir::new().unwrap();
    let inbox = temp_dir.path().join("inbox");
    assert!(list_inbox(&inbox).unwrap().is_empty());

    create_note(inbox.join("one.md"), &["1"]).unwrap();
    create_note(inbox.join("two.txt"), &["2"]).unwrap();
    create_note(inbox.join("sub/three.md"), &["3"]).unwrap();

    let notes = list_inbox(&inbox).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].0, inbox.join("one.md"));
}
