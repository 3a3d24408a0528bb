//! Project extraction.
//!
//! Projects a [`ProjectGraph`] into a [`Project`] summary in three
//! independent passes:
//!
//! 1. every native target, with the product names it links against
//! 2. remote packages referenced by target dependencies
//! 3. local packages: folder references containing a `Package.swift`
//!
//! Records that lack what a pass needs are left out of the result. That is
//! the intended filtering, so nothing is reported for them.

use std::path::Path;

use url::Url;

use crate::core::{FileReference, NativeTarget, Project, ProjectGraph, SwiftPackage, Target};
use crate::util::fs::{FileSystem, RealFileSystem};

/// Manifest file that marks a folder as a Swift package.
pub const PACKAGE_MANIFEST: &str = "Package.swift";

/// File kind Xcode records for folder references.
pub const FOLDER_FILE_TYPE: &str = "folder";

/// Builds [`Project`] summaries from project graphs.
#[derive(Debug, Clone, Default)]
pub struct ProjectExtractor<F = RealFileSystem> {
    fs: F,
}

impl ProjectExtractor {
    /// Create an extractor that checks manifests on the host filesystem.
    pub fn new() -> Self {
        ProjectExtractor { fs: RealFileSystem }
    }
}

impl<F: FileSystem> ProjectExtractor<F> {
    /// Create an extractor over a custom filesystem.
    pub fn with_fs(fs: F) -> Self {
        ProjectExtractor { fs }
    }

    /// Summarize `graph`. Local package manifests are looked up relative to
    /// `source_root`, the directory containing the project bundle.
    pub fn extract(&self, graph: &ProjectGraph, source_root: &Path) -> Project {
        let targets = targets(&graph.native_targets);

        let mut packages = remote_packages(&graph.native_targets);
        packages.extend(self.local_packages(&graph.file_references, source_root));

        Project::new(graph.name.clone(), targets, packages)
    }

    fn local_packages(&self, references: &[FileReference], source_root: &Path) -> Vec<SwiftPackage> {
        references
            .iter()
            .filter_map(|reference| self.local_package(reference, source_root))
            .collect()
    }

    fn local_package(&self, reference: &FileReference, source_root: &Path) -> Option<SwiftPackage> {
        if reference.last_known_file_type.as_deref() != Some(FOLDER_FILE_TYPE) {
            return None;
        }
        let (Some(name), Some(path)) = (non_empty(&reference.name), reference.path.as_deref())
        else {
            return None;
        };

        // Always relative to the source root, even if written with a leading `/`
        let manifest_path = source_root
            .join(path.trim_start_matches('/'))
            .join(PACKAGE_MANIFEST);
        if !self.fs.exists(&manifest_path) {
            return None;
        }

        Some(SwiftPackage::local(name, manifest_path))
    }
}

/// Extract a summary using the host filesystem.
pub fn extract(graph: &ProjectGraph, source_root: &Path) -> Project {
    ProjectExtractor::new().extract(graph, source_root)
}

fn targets(native_targets: &[NativeTarget]) -> Vec<Target> {
    native_targets
        .iter()
        .map(|target| {
            let products = target
                .package_product_dependencies
                .iter()
                .map(|product| product.product_name.clone())
                .collect();
            Target::new(target.name.clone(), products)
        })
        .collect()
}

fn remote_packages(native_targets: &[NativeTarget]) -> Vec<SwiftPackage> {
    native_targets
        .iter()
        .flat_map(|target| &target.dependencies)
        .filter_map(|dependency| {
            let package = dependency.product.as_ref()?.package.as_ref()?;
            let name = non_empty(&package.name)?;
            let repository_url = Url::parse(package.repository_url.as_deref()?).ok()?;
            Some(SwiftPackage::remote(name, repository_url))
        })
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
