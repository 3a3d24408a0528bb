//! Open a project on disk and summarize it.

use std::path::{Path, PathBuf};

use crate::core::{Project, ProjectLoader};
use crate::ops::extract::ProjectExtractor;
use crate::pbxproj::{PbxprojError, PbxprojLoader};
use crate::util::fs::{absolutize_cwd, FileSystem, RealFileSystem};

/// Loads a project descriptor and extracts its summary.
///
/// Loader errors are returned exactly as the loader produced them.
#[derive(Debug, Clone, Default)]
pub struct ProjectParser<L = PbxprojLoader, F = RealFileSystem> {
    loader: L,
    extractor: ProjectExtractor<F>,
}

impl ProjectParser {
    /// Parser for `.xcodeproj` bundles on the host filesystem.
    pub fn new() -> Self {
        ProjectParser {
            loader: PbxprojLoader::new(),
            extractor: ProjectExtractor::new(),
        }
    }
}

impl<L: ProjectLoader, F: FileSystem> ProjectParser<L, F> {
    /// Parser with a custom loader and filesystem.
    pub fn with_parts(loader: L, fs: F) -> Self {
        ProjectParser {
            loader,
            extractor: ProjectExtractor::with_fs(fs),
        }
    }

    /// Summarize the project at `path`.
    pub fn parse_project(&self, path: &Path) -> Result<Project, L::Error> {
        let graph = self.loader.load(path)?;
        let source_root = source_root(path);

        let project = self.extractor.extract(&graph, &source_root);
        tracing::debug!(
            "Extracted {}: {} targets, {} packages",
            project.name(),
            project.targets().len(),
            project.packages().len()
        );

        Ok(project)
    }
}

/// Summarize the `.xcodeproj` at `path` (bundle or its `project.pbxproj`).
pub fn parse_project(path: &Path) -> Result<Project, PbxprojError> {
    ProjectParser::new().parse_project(path)
}

/// Directory containing the project bundle, made absolute.
fn source_root(path: &Path) -> PathBuf {
    let (bundle, _) = crate::pbxproj::bundle_paths(&absolutize_cwd(path));
    match bundle.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
