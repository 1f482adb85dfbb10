//! Derivation of the C identifiers used for a see-object class.
//!
//! A class is described by a CamelCase base name (`Stack`) and a namespace
//! (`See`). From those two strings every spelling the generated C code needs
//! is derived:
//!
//! | field             | `("HttpClient", "See")` |
//! |-------------------|-------------------------|
//! | `camel_name`      | `SeeHttpClient`         |
//! | `function_name`   | `see_http_client`       |
//! | `macro_name`      | `SEE_HTTP_CLIENT`       |
//! | `namespace_macro` | `SEE`                   |
//! | `object_name`     | `http_client`           |
//!
//! Derivation is permissive. Non-ASCII input only produces a warning, and a
//! base name that already carries the namespace is not detected. Runs of
//! capitals stay together: `SeeHTTPClient` becomes `see_httpclient`, which is
//! what the existing see-object sources expect.

use serde::Serialize;

/// Namespace prepended to every see-object type and function.
pub const DEFAULT_NAMESPACE: &str = "See";

/// The parent used when none is given: the root of the class hierarchy.
pub const DEFAULT_PARENT: &str = "Object";

/// Every identifier spelling derived from one class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassNames {
    /// The name as typed, without namespace (`HttpClient`). Also the file stem.
    pub base_name: String,
    /// The namespace as given (`See`).
    pub namespace: String,
    /// Type name: namespace + base name (`SeeHttpClient`).
    pub camel_name: String,
    /// Prefix for public functions (`see_http_client`).
    pub function_name: String,
    /// Prefix for macros and enum values (`SEE_HTTP_CLIENT`).
    pub macro_name: String,
    /// Upper-cased namespace, used for the export macro (`SEE`).
    pub namespace_macro: String,
    /// `function_name` without the namespace prefix (`http_client`).
    ///
    /// The prefix is the snake_case namespace plus one underscore, counted in
    /// characters and removed whether or not an underscore was actually
    /// inserted (`("stack", "See")` gives `tack`). With an empty namespace
    /// nothing is removed, not one character.
    pub object_name: String,
}

impl ClassNames {
    /// Whether both inputs were plain ASCII, i.e. usable as C identifiers.
    pub fn is_ascii(&self) -> bool {
        self.base_name.is_ascii() && self.namespace.is_ascii()
    }
}

/// Convert a CamelCase identifier to snake_case.
///
/// An underscore goes between every ASCII lowercase letter and a directly
/// following ASCII uppercase letter, then the whole string is lowercased.
/// Consecutive capitals are not split, so acronyms collapse into one word.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c);
    }
    out.to_lowercase()
}

/// Derive all identifier spellings for `base_name` within `namespace`.
pub fn derive_names(base_name: &str, namespace: &str) -> ClassNames {
    for input in [base_name, namespace] {
        if !input.is_ascii() {
            tracing::warn!("{input} isn't valid ascii, double check the generated code");
        }
    }

    let camel_name = format!("{namespace}{base_name}");
    let function_name = to_snake_case(&camel_name);
    let macro_name = function_name.to_uppercase();
    let namespace_macro = namespace.to_uppercase();

    let prefix_len = match to_snake_case(namespace).chars().count() {
        0 => 0,
        n => n + 1,
    };
    let object_name: String = function_name.chars().skip(prefix_len).collect();

    tracing::debug!(%camel_name, %function_name, %object_name, "derived class names");

    ClassNames {
        base_name: base_name.to_string(),
        namespace: namespace.to_string(),
        camel_name,
        function_name,
        macro_name,
        namespace_macro,
        object_name,
    }
}
