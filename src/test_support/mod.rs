//! Test utilities and mocks for xcsummary unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use xcsummary::test_support::{GraphBuilder, MockFileSystem};
//!
//! #[test]
//! fn test_example() {
//!     let graph = GraphBuilder::new("App.xcodeproj")
//!         .target("App")
//!         .product("Collections")
//!         .folder("Core", "Packages/Core")
//!         .build();
//!
//!     let mut fs = MockFileSystem::new();
//!     fs.add_file("/work/Packages/Core/Package.swift", "");
//!
//!     // Use with ProjectExtractor::with_fs(&fs)...
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::{
    FileReference, NativeTarget, PackageProduct, ProjectGraph, RemotePackageReference,
    TargetDependency,
};
use crate::util::fs::FileSystem;

// Re-export fixtures for convenience
pub use fixtures::*;

/// Mock filesystem for testing without real I/O.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Create a new empty mock filesystem.
    pub fn new() -> Self {
        MockFileSystem::default()
    }

    /// Add a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path, content.into());
    }

    /// Add a directory and its parents.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        for dir in path.as_ref().ancestors() {
            if dir.as_os_str().is_empty() {
                break;
            }
            if !self.dirs.iter().any(|d| d == dir) {
                self.dirs.push(dir.to_path_buf());
            }
        }
    }

    /// Check if a path is a file.
    pub fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Check if a path is a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d == path)
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }
}

/// Builder for in-memory project graphs.
///
/// `product` and `remote_dependency` apply to the most recently added
/// target.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    graph: ProjectGraph,
}

impl GraphBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        GraphBuilder {
            graph: ProjectGraph::new(name),
        }
    }

    /// Start a new native target.
    pub fn target(mut self, name: &str) -> Self {
        self.graph.native_targets.push(NativeTarget::new(name));
        self
    }

    /// Add a package product dependency to the current target.
    pub fn product(mut self, product_name: &str) -> Self {
        self.current_target().package_product_dependencies.push(PackageProduct {
            product_name: product_name.to_string(),
            package: None,
        });
        self
    }

    /// Add a dependency on a product of a remote package to the current
    /// target.
    pub fn remote_dependency(
        mut self,
        product_name: &str,
        package_name: Option<&str>,
        repository_url: Option<&str>,
    ) -> Self {
        let package = RemotePackageReference {
            name: package_name.map(str::to_string),
            repository_url: repository_url.map(str::to_string),
        };
        self.current_target().dependencies.push(TargetDependency {
            product: Some(PackageProduct {
                product_name: product_name.to_string(),
                package: Some(package),
            }),
        });
        self
    }

    /// Add a folder reference.
    pub fn folder(mut self, name: &str, path: &str) -> Self {
        self.graph.file_references.push(FileReference {
            last_known_file_type: Some("folder".to_string()),
            name: Some(name.to_string()),
            path: Some(path.to_string()),
        });
        self
    }

    pub fn build(self) -> ProjectGraph {
        self.graph
    }

    fn current_target(&mut self) -> &mut NativeTarget {
        self.graph
            .native_targets
            .last_mut()
            .expect("GraphBuilder: call target() first")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_exists() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/work/Vendor/Bar/Package.swift", "");

        assert!(fs.exists(Path::new("/work/Vendor/Bar/Package.swift")));
        assert!(fs.exists(Path::new("/work/Vendor")));
        assert!(fs.is_dir(Path::new("/work")));
        assert!(!fs.exists(Path::new("/work/Vendor/Baz/Package.swift")));
    }

    #[test]
    fn test_graph_builder() {
        let graph = GraphBuilder::new("App.xcodeproj")
            .target("App")
            .product("Foo")
            .remote_dependency("Foo", Some("Foo"), None)
            .target("Tests")
            .folder("Bar", "Vendor/Bar")
            .build();

        assert_eq!(graph.native_targets.len(), 2);
        assert_eq!(graph.native_targets[0].package_product_dependencies.len(), 1);
        assert_eq!(graph.native_targets[0].dependencies.len(), 1);
        assert!(graph.native_targets[1].dependencies.is_empty());
        assert_eq!(graph.file_references.len(), 1);
    }
}
