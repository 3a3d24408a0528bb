//! Project discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pbxproj::BUNDLE_EXTENSION;

/// Failure to pick a project bundle from a directory.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("could not find an .xcodeproj in {}", dir.display())]
    NotFound { dir: PathBuf },

    #[error(
        "found {} .xcodeproj bundles in {}; pass one explicitly: {}",
        candidates.len(),
        dir.display(),
        display_names(candidates)
    )]
    Ambiguous {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error("failed to read directory: {}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Find the single `.xcodeproj` bundle directly inside `dir`.
pub fn find_project(dir: &Path) -> Result<PathBuf, LocateError> {
    let entries = fs::read_dir(dir).map_err(|source| LocateError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_project_bundle(path))
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Err(LocateError::NotFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(LocateError::Ambiguous {
            dir: dir.to_path_buf(),
            candidates,
        }),
    }
}

fn is_project_bundle(path: &Path) -> bool {
    path.is_dir() && path.extension().is_some_and(|ext| ext == BUNDLE_EXTENSION)
}

fn display_names(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_single_project() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("App.xcodeproj")).unwrap();
        fs::create_dir(tmp.path().join("App.xcworkspace")).unwrap();
        fs::write(tmp.path().join("notes.xcodeproj"), "not a bundle").unwrap();

        let found = find_project(tmp.path()).unwrap();
        assert_eq!(found, tmp.path().join("App.xcodeproj"));
    }

    #[test]
    fn test_find_no_project() {
        let tmp = TempDir::new().unwrap();
        let err = find_project(tmp.path()).unwrap_err();
        assert!(matches!(err, LocateError::NotFound { .. }));
    }

    #[test]
    fn test_find_ambiguous_projects() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("B.xcodeproj")).unwrap();
        fs::create_dir(tmp.path().join("A.xcodeproj")).unwrap();

        let err = find_project(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("A.xcodeproj, B.xcodeproj"));
    }

    #[test]
    fn test_find_in_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = find_project(&tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, LocateError::ReadDir { .. }));
    }
}
