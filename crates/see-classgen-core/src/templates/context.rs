//! The data a class template is rendered from.

use serde::Serialize;

use super::renderer::TemplateRenderer;
use crate::error::TemplateError;
use crate::naming::ClassNames;

/// Names of a class and its parent plus the project-wide strings.
///
/// One context serves both the header and the implementation template, so the
/// names are derived only once per generated class.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub class: ClassNames,
    pub parent: ClassNames,
    pub project_name: String,
    /// Rendered license block, inserted verbatim.
    pub license: String,
}

impl RenderContext {
    /// Build a context, rendering the license for `project_name` first.
    pub fn new(
        class: ClassNames,
        parent: ClassNames,
        project_name: &str,
        renderer: &TemplateRenderer,
    ) -> Result<Self, TemplateError> {
        let license = renderer.render_license(project_name)?;
        Ok(Self {
            class,
            parent,
            project_name: project_name.to_string(),
            license,
        })
    }
}
