//! Writing generated files without clobbering existing work.

use std::path::Path;

use crate::error::{ClassGenError, Result};

/// What happened to a single target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already existed and `force` was not set. Nothing was touched.
    Skipped,
}

/// Write `contents` verbatim to `path` unless it exists and `force` is false.
///
/// An existing file is reported as [`WriteOutcome::Skipped`], not as an error, so a
/// caller generating several files can carry on with the rest.
pub fn write_unless_exists(path: &Path, contents: &str, force: bool) -> Result<WriteOutcome> {
    if path.exists() && !force {
        tracing::debug!(path = %path.display(), "target exists, skipping");
        return Ok(WriteOutcome::Skipped);
    }

    std::fs::write(path, contents).map_err(|source| ClassGenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Stack.h");
        assert_eq!(write_unless_exists(&path, "abc", false).unwrap(), WriteOutcome::Written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc");
    }

    #[test]
    fn test_existing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Stack.h");
        std::fs::write(&path, "keep me").unwrap();
        assert_eq!(write_unless_exists(&path, "new", false).unwrap(), WriteOutcome::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Stack.c");
        std::fs::write(&path, "old").unwrap();
        assert_eq!(write_unless_exists(&path, "new", true).unwrap(), WriteOutcome::Written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("Stack.c");
        let err = write_unless_exists(&path, "x", false).unwrap_err();
        assert!(matches!(err, ClassGenError::Write { .. }));
    }
}
