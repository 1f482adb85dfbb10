//! Unified error types for see-classgen.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a template and a context into text.
///
/// Every variant means a template definition and the data fed into it have
/// drifted apart. None of them are recoverable: emitting partially
/// substituted C source is never an acceptable fallback.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template body uses a placeholder it does not declare.
    #[error("template '{template}' uses undeclared placeholder '{placeholder}'")]
    UndeclaredPlaceholder {
        template: &'static str,
        placeholder: String,
    },

    /// The template declares a placeholder its body never uses.
    #[error("template '{template}' declares placeholder '{placeholder}' but never uses it")]
    UnusedPlaceholder {
        template: &'static str,
        placeholder: String,
    },

    /// Handlebars failed to compile or render (strict mode: includes a
    /// placeholder with no matching field in the context).
    #[error("template '{template}' failed to render: {message}")]
    Render {
        template: &'static str,
        message: String,
    },
}

/// All errors that can occur during see-classgen operations.
#[derive(Error, Debug)]
pub enum ClassGenError {
    // --- Configuration ---

    /// An explicitly requested config file does not exist.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Templates ---

    /// A template and its render context do not match.
    #[error(transparent)]
    Template(#[from] TemplateError),

    // --- General ---

    /// Writing a generated file failed.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for `Result<T, ClassGenError>`.
pub type Result<T> = std::result::Result<T, ClassGenError>;
