//! Project summary - the normalized output of an extraction.
//!
//! A Project is built once per extraction and never mutated afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

/// Summary of an Xcode project: its targets and Swift package dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Display name (the file name of the project bundle)
    name: String,

    /// Native targets in graph order
    targets: Vec<Target>,

    /// Remote packages first, then local packages
    packages: Vec<SwiftPackage>,
}

impl Project {
    /// Create a new project summary.
    pub fn new(name: impl Into<String>, targets: Vec<Target>, packages: Vec<SwiftPackage>) -> Self {
        Project {
            name: name.into(),
            targets,
            packages,
        }
    }

    /// Get the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the targets.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Get all packages, remote ones first.
    pub fn packages(&self) -> &[SwiftPackage] {
        &self.packages
    }

    /// Iterate over packages fetched from a repository URL.
    pub fn remote_packages(&self) -> impl Iterator<Item = &SwiftPackage> {
        self.packages.iter().filter(|p| p.is_remote())
    }

    /// Iterate over packages that live inside the project's source tree.
    pub fn local_packages(&self) -> impl Iterator<Item = &SwiftPackage> {
        self.packages.iter().filter(|p| p.is_local())
    }

    /// Find a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }
}

/// A native build target and the package products it links against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    /// Target name
    pub name: String,

    /// Product names of the declared package product dependencies.
    /// Duplicates are kept.
    #[serde(rename = "packageProductDependencies")]
    pub package_product_dependencies: Vec<String>,
}

impl Target {
    /// Create a new target.
    pub fn new(name: impl Into<String>, package_product_dependencies: Vec<String>) -> Self {
        Target {
            name: name.into(),
            package_product_dependencies,
        }
    }
}

/// Where a Swift package comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SwiftPackage {
    /// Fetched from a source control repository
    Remote {
        name: String,
        #[serde(rename = "repositoryURL")]
        repository_url: Url,
    },
    /// Checked into the project's source tree
    Local {
        name: String,
        /// Path of the package's `Package.swift`
        #[serde(rename = "manifestPath")]
        manifest_path: PathBuf,
    },
}

impl SwiftPackage {
    /// Create a remote package.
    pub fn remote(name: impl Into<String>, repository_url: Url) -> Self {
        SwiftPackage::Remote {
            name: name.into(),
            repository_url,
        }
    }

    /// Create a local package.
    pub fn local(name: impl Into<String>, manifest_path: impl Into<PathBuf>) -> Self {
        SwiftPackage::Local {
            name: name.into(),
            manifest_path: manifest_path.into(),
        }
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        match self {
            SwiftPackage::Remote { name, .. } | SwiftPackage::Local { name, .. } => name,
        }
    }

    /// Get the repository URL (remote packages only).
    pub fn repository_url(&self) -> Option<&Url> {
        match self {
            SwiftPackage::Remote { repository_url, .. } => Some(repository_url),
            SwiftPackage::Local { .. } => None,
        }
    }

    /// Get the manifest path (local packages only).
    pub fn manifest_path(&self) -> Option<&Path> {
        match self {
            SwiftPackage::Remote { .. } => None,
            SwiftPackage::Local { manifest_path, .. } => Some(manifest_path),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SwiftPackage::Remote { .. })
    }

    pub fn is_local(&self) -> bool {
        matches!(self, SwiftPackage::Local { .. })
    }

    /// Short label for the package origin.
    pub fn kind(&self) -> &'static str {
        match self {
            SwiftPackage::Remote { .. } => "remote",
            SwiftPackage::Local { .. } => "local",
        }
    }
}

impl fmt::Display for SwiftPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwiftPackage::Remote {
                name,
                repository_url,
            } => write!(f, "{} (remote) {}", name, repository_url),
            SwiftPackage::Local {
                name,
                manifest_path,
            } => write!(f, "{} (local) {}", name, manifest_path.display()),
        }
    }
}
