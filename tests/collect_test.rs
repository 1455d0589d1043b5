use indexmap::IndexMap;
use notekit::collect::{collect_values, match_provided};
use notekit::error::Result;
use notekit::placeholder::{scan_placeholders, Placeholder};
use notekit::prompt::{DefaultsPrompter, Prompter};
use std::cell::RefCell;

/// Answers prompts from a script and records what was asked.
struct ScriptedPrompter {
    answers: RefCell<Vec<String>>,
    asked: RefCell<Vec<u32>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().rev().map(|a| a.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    fn next(&self, placeholder: &Placeholder) -> String {
        self.asked.borrow_mut().push(placeholder.index);
        self.answers.borrow_mut().pop().unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn is_interactive(&self) -> bool {
        true
    }

    fn text(&self, placeholder: &Placeholder) -> Result<String> {
        let answer = self.next(placeholder);
        Ok(if answer.is_empty() { placeholder.default.clone() } else { answer })
    }

    fn choice(&self, placeholder: &Placeholder, choices: &[String]) -> Result<String> {
        let answer = self.next(placeholder);
        Ok(choices.iter().find(|c| **c == answer).unwrap_or(&choices[0]).clone())
    }

    fn ask(&self, _prompt: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

fn provided(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_match_provided_either_direction() {
    let inputs = provided(&[("title", "My note")]);
    assert_eq!(match_provided("Note Title", &inputs), Some("My note"));

    let inputs = provided(&[("Project Status", "open")]);
    assert_eq!(match_provided("status", &inputs), Some("open"));

    assert_eq!(match_provided("Author", &inputs), None);
}

#[test]
fn test_first_matching_key_wins() {
    let inputs = provided(&[("tit", "first"), ("title", "second")]);
    assert_eq!(match_provided("Title", &inputs), Some("first"));
}

#[test]
fn test_non_interactive_uses_defaults_and_brackets() {
    let placeholders = scan_placeholders(&["${1:Title} ${2|low,high|} $3"]);
    let values = collect_values(&placeholders, None, &DefaultsPrompter::new()).unwrap();

    assert_eq!(values.len(), 3);
    assert_eq!(values[&1], "[Title]");
    assert_eq!(values[&2], "low");
    assert_eq!(values[&3], "[input item 3]");
}

#[test]
fn test_provided_values_skip_the_prompter() {
    let placeholders = scan_placeholders(&["${1:Title} ${2:Author}"]);
    let inputs = provided(&[("TITLE", "Gardening")]);
    let prompter = ScriptedPrompter::new(&["Ada"]);

    let values = collect_values(&placeholders, Some(&inputs), &prompter).unwrap();

    assert_eq!(values[&1], "Gardening");
    assert_eq!(values[&2], "Ada");
    assert_eq!(*prompter.asked.borrow(), vec![2]);
}

#[test]
fn test_prompts_in_ascending_index_order() {
    let placeholders = scan_placeholders(&["$3", "${2|a,b|}", "${1:First}"]);
    let prompter = ScriptedPrompter::new(&["one", "b", ""]);

    let values = collect_values(&placeholders, None, &prompter).unwrap();

    assert_eq!(*prompter.asked.borrow(), vec![1, 2, 3]);
    assert_eq!(values[&1], "one");
    assert_eq!(values[&2], "b");
    assert_eq!(values[&3], "");
}

#[test]
fn test_every_index_is_resolved() {
    let placeholders = scan_placeholders(&["$1 $2 $5 ${9:Nine}"]);
    let values = collect_values(&placeholders, Some(&provided(&[])), &DefaultsPrompter::new())
        .unwrap();
    let indices: Vec<u32> = values.keys().copied().collect();
    assert_eq!(indices, vec![1, 2, 5, 9]);
}
