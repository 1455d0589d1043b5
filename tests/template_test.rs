use chrono::{Datelike, Local};
use indexmap::IndexMap;
use notekit::error::Error;
use notekit::prompt::DefaultsPrompter;
use notekit::snippets::SnippetStore;
use notekit::template::{generate_content, process_template};
use tempfile::TempDir;

const SNIPPETS: &str = r##"{
    // Basic note
    "Basic note": {
        "prefix": "/basic",
        "body": [
            "---",
            "title: ${1:Title}",
            "tags: [${2:Tags}]",
            "status: ${3|draft,final|}",
            "---",
            "# ${1:Title}",
            "",
            "$0"
        ],
        "description": "Basic note template"
    },
    "Quote": {
        "prefix": ["/quote", "/q"],
        "body": "> $1\n> -- ${2:Author}"
    }
}"##;

#[test]
fn test_find_by_prefix() {
    let store = SnippetStore::from_json(SNIPPETS).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_prefix("/basic").unwrap().body().len(), 8);
    assert_eq!(store.find_by_prefix("/q").unwrap().body(), ["> $1", "> -- ${2:Author}"]);
}

#[test]
fn test_missing_prefix_fails_fast() {
    let store = SnippetStore::from_json(SNIPPETS).unwrap();
    match generate_content(&store, "/nope", None, &DefaultsPrompter::new()) {
        Err(Error::MissingTemplate { prefix }) => assert_eq!(prefix, "/nope"),
        other => panic!("Expected MissingTemplate, got {other:?}"),
    }
}

#[test]
fn test_templates_listing() {
    let store = SnippetStore::from_json(SNIPPETS).unwrap();
    assert_eq!(
        store.templates(),
        vec![
            ("/basic".to_string(), "Basic note template".to_string()),
            ("/quote".to_string(), "Quote".to_string()),
            ("/q".to_string(), "Quote".to_string()),
        ]
    );
}

#[test]
fn test_load_missing_store() {
    let temp_dir = TempDir::new().unwrap();
    let result = SnippetStore::load(temp_dir.path().join("markdown.code-snippets"));
    assert!(matches!(result, Err(Error::SnippetStoreNotFound { .. })));
}

#[test]
fn test_generate_non_interactive_with_inputs() {
    let store = SnippetStore::from_json(SNIPPETS).unwrap();
    let inputs: IndexMap<String, String> =
        [("title".to_string(), "Test note".to_string())].into_iter().collect();

    let content =
        generate_content(&store, "/basic", Some(&inputs), &DefaultsPrompter::new()).unwrap();

    assert_eq!(
        content,
        vec![
            "---",
            "title: Test note",
            "tags: [[Tags]]",
            "status: draft",
            "---",
            "# Test note",
            "",
            ""
        ]
    );
}

#[test]
fn test_free_text_defaults_replace_every_placeholder() {
    let body = ["$1 ${2:Two} $3", "${4:Four}"];
    let content = process_template(&body, None, &DefaultsPrompter::new()).unwrap();
    assert_eq!(content, vec!["[input item 1] [Two] [input item 3]", "[Four]"]);
}

#[test]
fn test_time_variables_use_render_time() {
    let content =
        process_template(&["${CURRENT_YEAR}"], None, &DefaultsPrompter::new()).unwrap();
    assert_eq!(content, vec![Local::now().year().to_string()]);
}
