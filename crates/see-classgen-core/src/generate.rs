//! Planning the files for one new class.
//!
//! [`plan`] derives the class and parent names once, renders the requested templates and
//! returns the files in memory. Writing them is left to the caller (see
//! [`crate::files::write_unless_exists`]), which keeps dry runs and tests free of I/O.

use std::path::PathBuf;

use crate::error::Result;
use crate::naming::derive_names;
use crate::templates::context::RenderContext;
use crate::templates::renderer::TemplateRenderer;

/// Which files of the pair to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Targets {
    #[default]
    Both,
    HeaderOnly,
    ImplementationOnly,
}

impl Targets {
    fn kinds(self) -> &'static [FileKind] {
        match self {
            Self::Both => &[FileKind::Header, FileKind::Implementation],
            Self::HeaderOnly => &[FileKind::Header],
            Self::ImplementationOnly => &[FileKind::Implementation],
        }
    }
}

/// The two kinds of file generated per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Header,
    Implementation,
}

impl FileKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Header => "h",
            Self::Implementation => "c",
        }
    }
}

/// Everything needed to generate one class.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// CamelCase name without namespace; also the file stem.
    pub class_name: String,
    pub parent_name: String,
    pub namespace: String,
    pub project_name: String,
    pub output_dir: PathBuf,
    pub targets: Targets,
    /// Produce files containing only the license block.
    pub license_only: bool,
}

/// A rendered file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: FileKind,
    pub path: PathBuf,
    pub contents: String,
}

/// Render the files described by `request`.
pub fn plan(renderer: &TemplateRenderer, request: &GenerateRequest) -> Result<Vec<GeneratedFile>> {
    let path_for = |kind: FileKind| {
        request
            .output_dir
            .join(format!("{}.{}", request.class_name, kind.extension()))
    };

    if request.license_only {
        let license = renderer.render_license(&request.project_name)?;
        return Ok(request
            .targets
            .kinds()
            .iter()
            .map(|&kind| GeneratedFile {
                kind,
                path: path_for(kind),
                contents: license.clone(),
            })
            .collect());
    }

    let ctx = RenderContext::new(
        derive_names(&request.class_name, &request.namespace),
        derive_names(&request.parent_name, &request.namespace),
        &request.project_name,
        renderer,
    )?;
    tracing::info!(
        class = %ctx.class.camel_name,
        parent = %ctx.parent.camel_name,
        "rendering class boilerplate"
    );

    let mut files = Vec::with_capacity(2);
    for &kind in request.targets.kinds() {
        let contents = match kind {
            FileKind::Header => renderer.render_header(&ctx)?,
            FileKind::Implementation => renderer.render_implementation(&ctx)?,
        };
        files.push(GeneratedFile {
            kind,
            path: path_for(kind),
            contents,
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::{write_unless_exists, WriteOutcome};

    fn request(targets: Targets) -> GenerateRequest {
        GenerateRequest {
            class_name: "Stack".into(),
            parent_name: "Object".into(),
            namespace: "See".into(),
            project_name: "see-object".into(),
            output_dir: PathBuf::from("src"),
            targets,
            license_only: false,
        }
    }

    #[test]
    fn test_plan_both() {
        let files = plan(&TemplateRenderer::new(), &request(Targets::Both)).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].kind, FileKind::Header);
        assert_eq!(files[0].path, PathBuf::from("src/Stack.h"));
        assert!(files[0].contents.contains("#ifndef SEE_STACK_H"));
        assert_eq!(files[1].kind, FileKind::Implementation);
        assert_eq!(files[1].path, PathBuf::from("src/Stack.c"));
        assert!(files[1].contents.contains("#include \"Stack.h\""));
    }

    #[test]
    fn test_plan_single_target() {
        let renderer = TemplateRenderer::new();
        let header = plan(&renderer, &request(Targets::HeaderOnly)).unwrap();
        assert_eq!(header.len(), 1);
        assert_eq!(header[0].kind, FileKind::Header);

        let source = plan(&renderer, &request(Targets::ImplementationOnly)).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source[0].path, PathBuf::from("src/Stack.c"));
    }

    #[test]
    fn test_plan_license_only() {
        let renderer = TemplateRenderer::new();
        let mut req = request(Targets::Both);
        req.license_only = true;
        req.project_name = "tiny".into();

        let files = plan(&renderer, &req).unwrap();
        assert_eq!(files.len(), 2);
        for file in &files {
            assert_eq!(file.contents, renderer.render_license("tiny").unwrap());
            assert!(!file.contents.contains("#ifndef"));
        }
    }

    #[test]
    fn test_plan_then_write_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(Targets::Both);
        req.output_dir = dir.path().to_path_buf();
        std::fs::write(dir.path().join("Stack.h"), "existing").unwrap();

        let files = plan(&TemplateRenderer::new(), &req).unwrap();
        let outcomes: Vec<_> = files
            .iter()
            .map(|f| write_unless_exists(&f.path, &f.contents, false).unwrap())
            .collect();

        assert_eq!(outcomes, vec![WriteOutcome::Skipped, WriteOutcome::Written]);
        assert_eq!(std::fs::read_to_string(dir.path().join("Stack.h")).unwrap(), "existing");
        assert_eq!(
            std::fs::read_to_string(dir.path().join("Stack.c")).unwrap(),
            files[1].contents
        );
    }
}
