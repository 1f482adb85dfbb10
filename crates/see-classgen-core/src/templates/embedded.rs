//! Compile-time embedded templates for class scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/see-classgen-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT add or remove a `{{placeholder}}` in a template file without updating its
//! `placeholders` list; rendering fails otherwise.

use std::fmt;

/// A fixed template body together with the placeholders it must use.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Short name used in error messages.
    pub name: &'static str,
    /// Handlebars source.
    pub source: &'static str,
    /// Dotted paths the body is expected to reference, each at least once.
    pub placeholders: &'static [&'static str],
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// -------------------------------------------------------
// License
// -------------------------------------------------------

/// GPLv3 notice placed on top of every generated file.
pub const LICENSE: Template = Template {
    name: "license",
    source: include_str!("../../../../templates/license/gpl3.hbs"),
    placeholders: &["project_name"],
};

// -------------------------------------------------------
// Class templates
// -------------------------------------------------------

/// `<Class>.h`: struct layout, casts, init values and class functions.
pub const HEADER: Template = Template {
    name: "header",
    source: include_str!("../../../../templates/class/header.h.hbs"),
    placeholders: &[
        "license",
        "project_name",
        "class.camel_name",
        "class.function_name",
        "class.macro_name",
        "class.object_name",
        "class.namespace_macro",
        "parent.camel_name",
        "parent.function_name",
        "parent.macro_name",
    ],
};

/// `<Class>.c`: init overrides and registration with the meta class.
pub const IMPLEMENTATION: Template = Template {
    name: "implementation",
    source: include_str!("../../../../templates/class/implementation.c.hbs"),
    placeholders: &[
        "license",
        "project_name",
        "class.base_name",
        "class.camel_name",
        "class.function_name",
        "class.macro_name",
        "class.object_name",
        "class.namespace_macro",
        "parent.camel_name",
        "parent.function_name",
        "parent.macro_name",
    ],
};
