use std::path::Path;

use anyhow::Result;

use see_classgen_core::config::GeneratorConfig;
use see_classgen_core::naming::{derive_names, DEFAULT_NAMESPACE};

use crate::output;

/// Print every identifier derived for `classname`.
pub fn run(config_path: Option<&Path>, classname: &str, namespace: Option<String>) -> Result<()> {
    let config = GeneratorConfig::discover(config_path)?;
    let namespace = namespace
        .or(config.namespace)
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

    let names = derive_names(classname, &namespace);

    output::print_header(&format!("see-classgen names: {classname}"));
    output::print_key_value("type", &names.camel_name);
    output::print_key_value("class type", &format!("{}Class", names.camel_name));
    output::print_key_value("functions", &format!("{}_*", names.function_name));
    output::print_key_value("macros", &format!("{}_*", names.macro_name));
    output::print_key_value("export macro", &format!("{}_EXPORT", names.namespace_macro));
    output::print_key_value("object", &names.object_name);
    output::print_key_value("files", &format!("{0}.h, {0}.c", names.base_name));
    Ok(())
}
