//! Template system for see-object class boilerplate.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! The class templates are rendered from a [`context::RenderContext`]:
//! - `{{license}}` — the license comment block, already rendered
//! - `{{project_name}}` — e.g. `see-object`
//! - `{{class.*}}` / `{{parent.*}}` — the fields of [`crate::naming::ClassNames`]
//!   (`camel_name`, `function_name`, `macro_name`, `namespace_macro`,
//!   `object_name`, `base_name`)
//!
//! The license template only sees `{{project_name}}`.
//!
//! ## Adding a placeholder
//!
//! 1. Use it in the `.hbs` file under `templates/`
//! 2. Add its path to the `placeholders` list of the matching constant in [`embedded`]
//! 3. Make sure [`context::RenderContext`] serializes a field at that path
//!
//! **Warning**: the renderer refuses templates whose body and declared placeholder
//! list disagree in either direction.

pub mod context;
pub mod embedded;
pub mod renderer;
