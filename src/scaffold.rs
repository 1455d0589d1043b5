//! Built-in note scaffolds rendered with MiniJinja.
use crate::error::Result;
use minijinja::Environment;

/// Daily note placed in the inbox; context: `date`.
pub const DAILY_NOTE: &str = "\
# {{ date }}

## Tasks

- [ ]

## Inbox



## Note links



## Reflection

";

/// Index of a new project folder; context: `name`, `date`.
pub const PROJECT_NOTE: &str = "\
# {{ name }}

**Status**: in progress
**Started**: {{ date }}
**Due**:
**Priority**: medium

## Overview



## Tasks

- [ ]

## Resources



## Notes

";

/// Trait for scaffold rendering engines.
pub trait ScaffoldRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based scaffold renderer.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl ScaffoldRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned("scaffold", template.to_string())?;
        let tmpl = env.get_template("scaffold")?;
        Ok(tmpl.render(context)?)
    }
}

/// Renders a scaffold into note lines.
pub fn scaffold_lines(
    engine: &dyn ScaffoldRenderer,
    template: &str,
    context: &serde_json::Value,
) -> Result<Vec<String>> {
    let rendered = engine.render(template, context)?;
    Ok(rendered.split('\n').map(str::to_string).collect())
}
