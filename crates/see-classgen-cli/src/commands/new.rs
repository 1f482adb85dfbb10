use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use see_classgen_core::config::{GeneratorConfig, DEFAULT_PROJECT_NAME};
use see_classgen_core::files::{write_unless_exists, WriteOutcome};
use see_classgen_core::generate::{self, GenerateRequest, Targets};
use see_classgen_core::naming::{DEFAULT_NAMESPACE, DEFAULT_PARENT};
use see_classgen_core::templates::renderer::TemplateRenderer;

use crate::output;

/// Arguments of `see-classgen new`, as parsed.
#[derive(Debug, Default)]
pub struct NewArgs {
    pub classname: String,
    pub parent: Option<String>,
    pub source: Option<PathBuf>,
    pub project: Option<String>,
    pub namespace: Option<String>,
    pub header: bool,
    pub object: bool,
    pub force: bool,
    pub license_only: bool,
    pub dry_run: bool,
}

/// Generate the files for a new class.
///
/// An existing target is reported on stderr and left alone unless `--force` is given;
/// the remaining files are still written.
pub fn run(config_path: Option<&Path>, args: NewArgs) -> Result<()> {
    let config = GeneratorConfig::discover(config_path)?;
    let dry_run = args.dry_run;
    let force = args.force;
    let request = resolve(&config, args);

    let renderer = TemplateRenderer::new();
    let files = generate::plan(&renderer, &request)
        .with_context(|| format!("failed to generate {}", request.class_name))?;

    if dry_run {
        for file in &files {
            println!("// ---- {} ----", file.path.display());
            print!("{}", file.contents);
        }
        return Ok(());
    }

    output::print_header(&format!("see-classgen new: {}", request.class_name));
    let mut written = 0;
    for file in &files {
        match write_unless_exists(&file.path, &file.contents, force)? {
            WriteOutcome::Written => {
                written += 1;
                output::print_success(&format!("Wrote {}", file.path.display()));
            }
            WriteOutcome::Skipped => output::print_warning(&format!(
                "The file {} seems to exist, cowardly refusing to overwrite.",
                file.path.display()
            )),
        }
    }
    tracing::info!(written, requested = files.len(), "done");

    Ok(())
}

/// Merge command-line flags, config file values and built-in defaults, in that order.
fn resolve(config: &GeneratorConfig, args: NewArgs) -> GenerateRequest {
    let targets = if args.header {
        Targets::HeaderOnly
    } else if args.object {
        Targets::ImplementationOnly
    } else {
        Targets::Both
    };

    GenerateRequest {
        class_name: args.classname,
        parent_name: args
            .parent
            .or_else(|| config.parent.clone())
            .unwrap_or_else(|| DEFAULT_PARENT.to_string()),
        namespace: args
            .namespace
            .or_else(|| config.namespace.clone())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        project_name: args
            .project
            .or_else(|| config.project_name.clone())
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        output_dir: args
            .source
            .or_else(|| config.source_dir.clone())
            .unwrap_or_else(default_source_dir),
        targets,
        license_only: args.license_only,
    }
}

/// `src/` next to the directory holding the executable, as in a checkout where the
/// tool lives in `<root>/utils/`.
fn default_source_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| Some(exe.parent()?.parent()?.join("src")))
        .unwrap_or_else(|| PathBuf::from("src"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(classname: &str) -> NewArgs {
        NewArgs {
            classname: classname.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let request = resolve(&GeneratorConfig::default(), args("Stack"));
        assert_eq!(request.class_name, "Stack");
        assert_eq!(request.parent_name, "Object");
        assert_eq!(request.namespace, "See");
        assert_eq!(request.project_name, "see-object");
        assert_eq!(request.targets, Targets::Both);
        assert!(request.output_dir.ends_with("src"));
        assert!(!request.license_only);
    }

    #[test]
    fn test_flags_override_config() {
        let config = GeneratorConfig {
            project_name: Some("from-config".into()),
            namespace: Some("Cfg".into()),
            parent: Some("Base".into()),
            source_dir: Some(PathBuf::from("cfg-src")),
        };
        let mut a = args("Stack");
        a.namespace = Some("Cli".into());
        a.source = Some(PathBuf::from("cli-src"));
        a.object = true;

        let request = resolve(&config, a);
        assert_eq!(request.namespace, "Cli");
        assert_eq!(request.output_dir, PathBuf::from("cli-src"));
        assert_eq!(request.project_name, "from-config");
        assert_eq!(request.parent_name, "Base");
        assert_eq!(request.targets, Targets::ImplementationOnly);
    }

    #[test]
    fn test_header_wins_over_object() {
        let mut a = args("Stack");
        a.header = true;
        a.object = true;
        let request = resolve(&GeneratorConfig::default(), a);
        assert_eq!(request.targets, Targets::HeaderOnly);
    }

    #[test]
    fn test_run_header_and_object_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args("Deque");
        a.source = Some(dir.path().to_path_buf());
        a.header = true;
        a.object = true;
        run(Some(&write_empty_config(dir.path())), a).unwrap();

        assert!(dir.path().join("Deque.h").exists());
        assert!(!dir.path().join("Deque.c").exists());
    }

    #[test]
    fn test_run_writes_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Queue.h"), "mine").unwrap();

        let config_path = dir.path().join("see-classgen.json");
        std::fs::write(&config_path, r#"{ "project_name": "queue-lib" }"#).unwrap();

        let mut a = args("Queue");
        a.source = Some(dir.path().to_path_buf());
        run(Some(&config_path), a).unwrap();

        assert_eq!(std::fs::read_to_string(dir.path().join("Queue.h")).unwrap(), "mine");
        let source = std::fs::read_to_string(dir.path().join("Queue.c")).unwrap();
        assert!(source.contains("This file is part of queue-lib."));
        assert!(source.contains("see_queue_init()"));
    }

    #[test]
    fn test_run_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Queue.h"), "mine").unwrap();

        let mut a = args("Queue");
        a.source = Some(dir.path().to_path_buf());
        a.header = true;
        a.force = true;
        a.project = Some("see-object".into());
        run(Some(&write_empty_config(dir.path())), a).unwrap();

        let header = std::fs::read_to_string(dir.path().join("Queue.h")).unwrap();
        assert!(header.contains("#define SEE_QUEUE_H"));
        assert!(!dir.path().join("Queue.c").exists());
    }

    fn write_empty_config(dir: &Path) -> PathBuf {
        let path = dir.join("empty.json");
        std::fs::write(&path, "{}").unwrap();
        path
    }
}
