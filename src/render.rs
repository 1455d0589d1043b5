//! Renders snippet bodies into note content.

use crate::constants::TERMINAL_MARKER;
use crate::placeholder::find_all;
use chrono::{DateTime, Local};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Resolved value for each placeholder index.
pub type PlaceholderValues = BTreeMap<u32, String>;

fn time_variable_regex() -> &'static Regex {
    static TIME_VARIABLE: OnceLock<Regex> = OnceLock::new();
    TIME_VARIABLE.get_or_init(|| {
        Regex::new(r"\$\{(CURRENT_[A-Z_]+)\}|\$(CURRENT_[A-Z_]+)")
            .expect("valid time variable regex")
    })
}

/// Value of a VS Code time variable at `now`, `None` for unknown names.
pub fn time_variable(name: &str, now: &DateTime<Local>) -> Option<String> {
    let format = match name {
        "CURRENT_YEAR" => "%Y",
        "CURRENT_YEAR_SHORT" => "%y",
        "CURRENT_MONTH" => "%m",
        "CURRENT_MONTH_NAME" => "%B",
        "CURRENT_MONTH_NAME_SHORT" => "%b",
        "CURRENT_DATE" => "%d",
        "CURRENT_DAY_NAME" => "%A",
        "CURRENT_DAY_NAME_SHORT" => "%a",
        "CURRENT_HOUR" => "%H",
        "CURRENT_MINUTE" => "%M",
        "CURRENT_SECOND" => "%S",
        "CURRENT_SECONDS_UNIX" => return Some(now.timestamp().to_string()),
        _ => return None,
    };
    Some(now.format(format).to_string())
}

/// Substitutes the time variables of `line`, leaving unknown names as written.
pub fn substitute_time_variables(line: &str, now: &DateTime<Local>) -> String {
    time_variable_regex()
        .replace_all(line, |caps: &Captures<'_>| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            time_variable(name, now).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Renders one line: time variables first, then every placeholder in a single
/// pass over the line. Substituted values are never rescanned, so a value
/// containing `$2` or `$0` is kept verbatim. The terminal marker is dropped
/// from the snippet text only.
pub fn render_line(line: &str, values: &PlaceholderValues, now: &DateTime<Local>) -> String {
    let line = substitute_time_variables(line, now);
    let mut rendered = String::with_capacity(line.len());
    let mut last = 0;
    for found in find_all(&line) {
        rendered.push_str(&line[last..found.range.start].replace(TERMINAL_MARKER, ""));
        if let Some(value) = values.get(&found.index) {
            rendered.push_str(value);
        }
        last = found.range.end;
    }
    rendered.push_str(&line[last..].replace(TERMINAL_MARKER, ""));
    rendered
}

/// Renders a snippet body at a fixed point in time.
pub fn render_body_at<S: AsRef<str>>(
    body: &[S],
    values: &PlaceholderValues,
    now: &DateTime<Local>,
) -> Vec<String> {
    body.iter().map(|line| render_line(line.as_ref(), values, now)).collect()
}

/// Renders a snippet body with the time variables taken from the local clock.
pub fn render_body<S: AsRef<str>>(body: &[S], values: &PlaceholderValues) -> Vec<String> {
    render_body_at(body, values, &Local::now())
}
