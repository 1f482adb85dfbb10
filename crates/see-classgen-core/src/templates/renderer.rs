//! Handlebars-based template renderer for class scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping disabled. Before rendering, the placeholders a template body references are
//! compared against the list the template declares. Any disagreement is an error, and so
//! is a declared placeholder missing from the data context. The output is C source; text
//! with a silently dropped name would compile into confusing errors far from the cause.
//!
//! ## Usage
//!
//! ```ignore
//! use see_classgen_core::naming::derive_names;
//! use see_classgen_core::templates::{context::RenderContext, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let ctx = RenderContext::new(
//!     derive_names("Stack", "See"),
//!     derive_names("Object", "See"),
//!     "see-object",
//!     &renderer,
//! )?;
//! let header = renderer.render_header(&ctx)?;
//! ```

use std::collections::BTreeSet;

use handlebars::Handlebars;
use serde::Serialize;

use super::context::RenderContext;
use super::embedded::{self, Template};
use crate::error::TemplateError;

/// Template renderer using Handlebars for generating class files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

#[derive(Serialize)]
struct LicenseContext<'a> {
    project_name: &'a str,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    ///
    /// The license contains `<http://...>`, which HTML escaping would mangle.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render `template` with the given data context.
    pub fn render<T: Serialize>(&self, template: &Template, data: &T) -> Result<String, TemplateError> {
        check_placeholders(template)?;
        self.hbs
            .render_template(template.source, data)
            .map_err(|e| TemplateError::Render {
                template: template.name,
                message: e.to_string(),
            })
    }

    /// Render only the license block for `project_name`.
    pub fn render_license(&self, project_name: &str) -> Result<String, TemplateError> {
        self.render(&embedded::LICENSE, &LicenseContext { project_name })
    }

    /// Render the `.h` file for the class in `ctx`.
    pub fn render_header(&self, ctx: &RenderContext) -> Result<String, TemplateError> {
        self.render(&embedded::HEADER, ctx)
    }

    /// Render the `.c` file for the class in `ctx`.
    pub fn render_implementation(&self, ctx: &RenderContext) -> Result<String, TemplateError> {
        self.render(&embedded::IMPLEMENTATION, ctx)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the expression paths used in a template body.
///
/// Only plain `{{path}}` expressions are expected in these templates; comments
/// (`{{! ... }}`) are skipped and whitespace control markers are ignored.
pub fn referenced_placeholders(source: &str) -> BTreeSet<&str> {
    let mut found = BTreeSet::new();
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let inner = after[..end]
            .trim_matches(|c| c == '{' || c == '~')
            .trim();
        if !inner.is_empty() && !inner.starts_with('!') {
            found.insert(inner);
        }
        rest = &after[end + 2..];
    }
    found
}

fn check_placeholders(template: &Template) -> Result<(), TemplateError> {
    let used = referenced_placeholders(template.source);
    let declared: BTreeSet<&str> = template.placeholders.iter().copied().collect();

    if let Some(extra) = used.difference(&declared).next() {
        return Err(TemplateError::UndeclaredPlaceholder {
            template: template.name,
            placeholder: (*extra).to_string(),
        });
    }
    if let Some(missing) = declared.difference(&used).next() {
        return Err(TemplateError::UnusedPlaceholder {
            template: template.name,
            placeholder: (*missing).to_string(),
        });
    }
    Ok(())
}
