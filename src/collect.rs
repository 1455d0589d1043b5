//! Resolves a value for every placeholder of a snippet body.

use crate::error::Result;
use crate::placeholder::{Placeholder, PlaceholderKind, Placeholders};
use crate::prompt::Prompter;
use crate::render::PlaceholderValues;
use indexmap::IndexMap;
use log::debug;

/// Finds the supplied value whose name matches a placeholder description.
///
/// Names match case-insensitively when either one contains the other; the
/// first matching name in insertion order wins.
pub fn match_provided<'a>(
    description: &str,
    provided: &'a IndexMap<String, String>,
) -> Option<&'a str> {
    let description = description.to_lowercase();
    provided
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            description.contains(&key) || key.contains(&description)
        })
        .map(|(_, value)| value.as_str())
}

fn resolve(placeholder: &Placeholder, prompter: &dyn Prompter) -> Result<String> {
    match &placeholder.kind {
        PlaceholderKind::Choice(choices) => prompter.choice(placeholder, choices),
        PlaceholderKind::Text => prompter.text(placeholder),
    }
}

/// Resolves every placeholder in ascending index order.
///
/// Supplied values are matched by name first; anything left is handed to the
/// prompter. The returned map has exactly one entry per placeholder.
///
/// # Arguments
/// * `placeholders` - Placeholders scanned from a snippet body
/// * `provided` - Values supplied up front, keyed by placeholder description
/// * `prompter` - Source of the values nobody supplied
///
/// # Returns
/// * `Result<PlaceholderValues>` - One value per placeholder index
///
/// # Errors
/// * `Error::PromptError` if the prompter cannot read an answer
pub fn collect_values(
    placeholders: &Placeholders,
    provided: Option<&IndexMap<String, String>>,
    prompter: &dyn Prompter,
) -> Result<PlaceholderValues> {
    let mut values = PlaceholderValues::new();

    for placeholder in placeholders.iter() {
        let supplied = provided.and_then(|p| match_provided(&placeholder.description, p));
        let value = match supplied {
            Some(value) => {
                debug!("Item {} '{}' supplied", placeholder.index, placeholder.description);
                value.to_string()
            }
            None => resolve(placeholder, prompter)?,
        };
        values.insert(placeholder.index, value);
    }

    Ok(values)
}
