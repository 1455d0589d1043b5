//! Terminal output helpers.

use console::style;

pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", style("⚠").yellow(), message);
}

pub fn info(message: &str) {
    println!("{} {}", style("ℹ").cyan(), message);
}

pub fn error(message: &str) {
    eprintln!("{}", error_line(message));
}

/// Formats an error message the way [`error`] prints it.
pub fn error_line(message: &str) -> String {
    format!("{} {}", style("✗").red(), style(message).red())
}

pub fn header(message: &str) {
    println!("{}", style(message).bold().green());
}

/// Prints a dimmed line, used for per-item listings.
pub fn item(message: &str) {
    println!("  {}", style(message).dim());
}

pub fn highlight(message: &str) {
    println!("  {}", style(message).magenta());
}
