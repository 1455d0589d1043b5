//! User input and interaction handling.
//! Placeholder values are asked through the [`Prompter`] trait so the value
//! collector works the same way with a terminal or without one.

use crate::error::{Error, Result};
use crate::placeholder::Placeholder;
use dialoguer::Input;
use log::debug;
use thiserror::Error as ThisError;

/// Source of values for placeholders nobody supplied up front.
pub trait Prompter {
    /// Whether answers come from a person at a terminal.
    fn is_interactive(&self) -> bool;

    /// Asks for a free-text value.
    fn text(&self, placeholder: &Placeholder) -> Result<String>;

    /// Asks to pick one of `choices` and returns the picked value.
    fn choice(&self, placeholder: &Placeholder, choices: &[String]) -> Result<String>;

    /// Asks a standalone question, `None` when it was dismissed.
    fn ask(&self, prompt: &str) -> Result<Option<String>>;
}

/// Rejected answer to a numbered choice prompt.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("enter a number between 1 and {len}")]
    OutOfRange { len: usize },
    #[error("enter a valid number")]
    NotANumber,
}

/// Parses a 1-based answer to a numbered choice prompt into a 0-based index.
///
/// An empty answer selects the first choice.
pub fn parse_selection(input: &str, len: usize) -> std::result::Result<usize, InvalidSelection> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }
    let number: usize = input.parse().map_err(|_| InvalidSelection::NotANumber)?;
    if (1..=len).contains(&number) {
        Ok(number - 1)
    } else {
        Err(InvalidSelection::OutOfRange { len })
    }
}

/// Terminal prompter built on dialoguer.
///
/// An interrupted or failed prompt counts as accepting the default.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn is_interactive(&self) -> bool {
        true
    }

    fn text(&self, placeholder: &Placeholder) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(format!("  [{}] {}", placeholder.index, placeholder.description))
            .allow_empty(true);
        if !placeholder.default.is_empty() {
            input = input.default(placeholder.default.clone());
        }

        match input.interact_text() {
            Ok(answer) if !answer.trim().is_empty() => Ok(answer.trim().to_string()),
            Ok(_) => Ok(placeholder.default.clone()),
            Err(e) => {
                debug!("Prompt for item {} interrupted: {}", placeholder.index, e);
                Ok(placeholder.default.clone())
            }
        }
    }

    fn choice(&self, placeholder: &Placeholder, choices: &[String]) -> Result<String> {
        let Some(first) = choices.first() else {
            return Ok(placeholder.fallback());
        };
        println!("  [{}] {}", placeholder.index, placeholder.description);
        for (number, choice) in choices.iter().enumerate() {
            println!("    {}. {}", number + 1, choice);
        }

        let len = choices.len();
        let answer = Input::<String>::new()
            .with_prompt(format!("    Select (1-{len}, default: 1)"))
            .allow_empty(true)
            .validate_with(|input: &String| parse_selection(input, len).map(|_| ()))
            .interact_text();

        match answer {
            Ok(answer) => {
                let selected = parse_selection(&answer, len).unwrap_or(0);
                Ok(choices[selected].clone())
            }
            Err(e) => {
                debug!("Selection for item {} interrupted: {}", placeholder.index, e);
                Ok(first.clone())
            }
        }
    }

    fn ask(&self, prompt: &str) -> Result<Option<String>> {
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(answer) => Ok(Some(answer.trim().to_string())),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
                Ok(None)
            }
            Err(e) => Err(Error::PromptError(e.to_string())),
        }
    }
}

/// Prompter that never asks: every placeholder gets its fallback value.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn is_interactive(&self) -> bool {
        false
    }

    fn text(&self, placeholder: &Placeholder) -> Result<String> {
        Ok(placeholder.fallback())
    }

    fn choice(&self, placeholder: &Placeholder, _choices: &[String]) -> Result<String> {
        Ok(placeholder.fallback())
    }

    fn ask(&self, _prompt: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("", 3), Ok(0));
        assert_eq!(parse_selection(" 2 ", 3), Ok(1));
        assert_eq!(parse_selection("3", 3), Ok(2));
        assert_eq!(parse_selection("0", 3), Err(InvalidSelection::OutOfRange { len: 3 }));
        assert_eq!(parse_selection("4", 3), Err(InvalidSelection::OutOfRange { len: 3 }));
        assert_eq!(parse_selection("two", 3), Err(InvalidSelection::NotANumber));
        assert_eq!(parse_selection("-1", 3), Err(InvalidSelection::NotANumber));
    }

    #[test]
    fn test_invalid_selection_message() {
        assert_eq!(
            InvalidSelection::OutOfRange { len: 3 }.to_string(),
            "enter a number between 1 and 3"
        );
    }
}
