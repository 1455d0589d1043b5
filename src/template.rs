//! Generates note content from a snippet template.
//! Scans the body, collects every value, then renders.

use crate::collect::collect_values;
use crate::error::Result;
use crate::placeholder::scan_placeholders;
use crate::prompt::Prompter;
use crate::render::render_body;
use crate::snippets::SnippetStore;
use crate::ui;
use indexmap::IndexMap;
use log::debug;

/// Renders a snippet body, resolving its placeholders first.
pub fn process_template<S: AsRef<str>>(
    body: &[S],
    provided: Option<&IndexMap<String, String>>,
    prompter: &dyn Prompter,
) -> Result<Vec<String>> {
    let placeholders = scan_placeholders(body);
    debug!("Template declares {} placeholder(s)", placeholders.len());

    if prompter.is_interactive() && !placeholders.is_empty() {
        ui::info("Fill in the template parameters:");
    }
    let values = collect_values(&placeholders, provided, prompter)?;

    Ok(render_body(body, &values))
}

/// Generates note content from the snippet registered under `prefix`.
///
/// # Errors
/// * `Error::MissingTemplate` if no snippet declares `prefix`
pub fn generate_content(
    store: &SnippetStore,
    prefix: &str,
    provided: Option<&IndexMap<String, String>>,
    prompter: &dyn Prompter,
) -> Result<Vec<String>> {
    let snippet = store.find_by_prefix(prefix)?;
    process_template(snippet.body(), provided, prompter)
}
