use notekit::extract::{extract_tags, extract_wiki_links, link_target};

#[test]
fn test_wiki_links_are_trimmed() {
    assert_eq!(extract_wiki_links("See [[Alpha]] and [[ Beta ]]"), vec!["Alpha", "Beta"]);
}

#[test]
fn test_wiki_links_keep_duplicates_and_order() {
    let content = "[[B]] then [[A]]\nand [[B]] again";
    assert_eq!(extract_wiki_links(content), vec!["B", "A", "B"]);
}

#[test]
fn test_malformed_wiki_links_are_ignored() {
    assert!(extract_wiki_links("[[]] [not a link] [[open").is_empty());
}

#[test]
fn test_tags_with_quotes() {
    assert_eq!(extract_tags(r#"tags: ["a", "b", c]"#), vec!["a", "b", "c"]);
    assert_eq!(extract_tags("tags: ['x' , y]"), vec!["x", "y"]);
}

#[test]
fn test_tags_in_front_matter() {
    let content = "---\ntitle: Note\ntags: [zettel, review]\n---\n# Note\n";
    assert_eq!(extract_tags(content), vec!["zettel", "review"]);
}

#[test]
fn test_missing_or_empty_tags() {
    assert!(extract_tags("# No front matter").is_empty());
    assert!(extract_tags("tags: []").is_empty());
    assert!(extract_tags("tags: [ , ]").is_empty());
}

#[test]
fn test_link_target_strips_decorations() {
    assert_eq!(link_target("folder/Note.md#Intro|alias"), "Note");
    assert_eq!(link_target("Note"), "Note");
}
