//! Snippet placeholder grammar and scanner.
//!
//! A snippet body may declare tab stops in three forms:
//!
//! | Form        | Syntax               | Declares                    |
//! |-------------|----------------------|-----------------------------|
//! | `Described` | `${1:Title}`         | free text, described        |
//! | `Choice`    | `${2|low,med,high|}` | one of the listed choices   |
//! | `Bare`      | `$3`                 | free text, undescribed      |
//!
//! The table below is the single definition of these forms: the scanner
//! discovers placeholders with it and the renderer substitutes values with it.
//! `$0` is the terminal marker and never declares a placeholder.

use regex::Regex;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::OnceLock;

/// The three placeholder forms, in the order they are matched on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderForm {
    Described,
    Choice,
    Bare,
}

impl PlaceholderForm {
    /// Matching priority within a line.
    pub const ALL: [PlaceholderForm; 3] =
        [PlaceholderForm::Described, PlaceholderForm::Choice, PlaceholderForm::Bare];

    fn pattern(self) -> &'static str {
        match self {
            PlaceholderForm::Described => r"\$\{(\d+):([^}]+)\}",
            PlaceholderForm::Choice => r"\$\{(\d+)\|([^}]+)\|\}",
            PlaceholderForm::Bare => r"\$(\d+)",
        }
    }

    fn regex(self) -> &'static Regex {
        static TABLE: OnceLock<[Regex; 3]> = OnceLock::new();
        let table = TABLE.get_or_init(|| {
            PlaceholderForm::ALL
                .map(|form| Regex::new(form.pattern()).expect("valid placeholder pattern"))
        });
        &table[self as usize]
    }

    /// Finds every occurrence of this form in `line`.
    pub fn find_in(self, line: &str) -> Vec<PlaceholderMatch<'_>> {
        self.regex()
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                // A bare `$n` directly followed by one of these belongs to a
                // malformed braced form, not to a tab stop.
                if self == PlaceholderForm::Bare
                    && line[whole.end()..].starts_with([':', '|', '}'])
                {
                    return None;
                }
                let index = caps[1].parse().ok()?;
                Some(PlaceholderMatch {
                    form: self,
                    index,
                    range: whole.range(),
                    body: caps.get(2).map_or("", |m| m.as_str()),
                })
            })
            .collect()
    }
}

/// One occurrence of a placeholder form within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch<'a> {
    pub form: PlaceholderForm,
    pub index: u32,
    pub range: Range<usize>,
    /// Description (`Described`) or raw choice list (`Choice`); empty for `Bare`.
    pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    Text,
    Choice(Vec<String>),
}

/// A placeholder declared by a snippet body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub index: u32,
    pub kind: PlaceholderKind,
    pub description: String,
    pub default: String,
}

impl Placeholder {
    fn from_match(found: &PlaceholderMatch<'_>) -> Self {
        let index = found.index;
        match found.form {
            PlaceholderForm::Described => Self {
                index,
                kind: PlaceholderKind::Text,
                description: found.body.to_string(),
                default: String::new(),
            },
            PlaceholderForm::Choice => {
                let choices: Vec<String> =
                    found.body.split(',').map(|c| c.trim().to_string()).collect();
                Self {
                    index,
                    description: format!("choose from ({})", choices.join("/")),
                    default: choices.first().cloned().unwrap_or_default(),
                    kind: PlaceholderKind::Choice(choices),
                }
            }
            PlaceholderForm::Bare => Self {
                index,
                kind: PlaceholderKind::Text,
                description: format!("input item {index}"),
                default: String::new(),
            },
        }
    }

    /// The value used when nobody supplies one: the default, or the
    /// bracketed description so the gap stays visible in the note.
    pub fn fallback(&self) -> String {
        if self.default.is_empty() {
            format!("[{}]", self.description)
        } else {
            self.default.clone()
        }
    }
}

/// Placeholders of one snippet body keyed by index, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders(BTreeMap<u32, Placeholder>);

impl Placeholders {
    /// Records a declaration unless the index is already declared.
    ///
    /// Returns `false` when an earlier declaration was kept.
    pub fn declare(&mut self, placeholder: Placeholder) -> bool {
        if placeholder.index == 0 || self.0.contains_key(&placeholder.index) {
            return false;
        }
        self.0.insert(placeholder.index, placeholder);
        true
    }

    pub fn get(&self, index: u32) -> Option<&Placeholder> {
        self.0.get(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Finds the placeholders of `line` across all forms, ordered by position.
///
/// Forms are taken in [`PlaceholderForm::ALL`] order and a match overlapping
/// one already taken is dropped, so `$2` inside `${1:cost $2}` is not a
/// separate occurrence.
pub fn find_all(line: &str) -> Vec<PlaceholderMatch<'_>> {
    let mut found: Vec<PlaceholderMatch<'_>> = Vec::new();
    for form in PlaceholderForm::ALL {
        for candidate in form.find_in(line) {
            let overlaps = found.iter().any(|taken| {
                candidate.range.start < taken.range.end && taken.range.start < candidate.range.end
            });
            if !overlaps {
                found.push(candidate);
            }
        }
    }
    found.sort_by_key(|m| m.range.start);
    found
}

/// Discovers the placeholders declared in a snippet body.
///
/// Lines are scanned independently; within a line the forms are matched in
/// [`PlaceholderForm::ALL`] order. The first declaration of an index wins.
pub fn scan_placeholders<S: AsRef<str>>(body: &[S]) -> Placeholders {
    let mut placeholders = Placeholders::default();
    for line in body {
        for form in PlaceholderForm::ALL {
            for found in form.find_in(line.as_ref()) {
                placeholders.declare(Placeholder::from_match(&found));
            }
        }
    }
    placeholders
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_form_rejects_braced_followers() {
        assert!(PlaceholderForm::Bare.find_in("$1: $2| $3}").is_empty());
        assert_eq!(PlaceholderForm::Bare.find_in("cost $12.")[0].index, 12);
    }

    #[test]
    fn test_braced_forms_are_not_bare() {
        assert!(PlaceholderForm::Bare.find_in("${1:Title} ${2|a,b|}").is_empty());
    }

    #[test]
    fn test_find_all_orders_by_position() {
        let found = find_all("$3 ${2|a,b|} ${1:cost $4} $0");
        let indexes: Vec<u32> = found.iter().map(|m| m.index).collect();
        assert_eq!(indexes, vec![3, 2, 1, 0]);
        assert_eq!(found[2].body, "cost $4");
    }

    #[test]
    fn test_zero_is_never_declared() {
        let placeholders = scan_placeholders(&["${0:end} $0"]);
        assert!(placeholders.is_empty());
    }
}
