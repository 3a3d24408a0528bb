//! Project object graph - the input side of an extraction.
//!
//! These records describe the handful of descriptor objects the extractor
//! reads. They are deliberately loose: every field a descriptor may omit is
//! an `Option`, and a loader fills in whatever it found. Deciding what to do
//! with missing fields is left to the extractor.

/// The object graph of one project descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectGraph {
    /// Display name of the project (file name of the bundle)
    pub name: String,

    /// Native targets in graph order
    pub native_targets: Vec<NativeTarget>,

    /// File references in graph order
    pub file_references: Vec<FileReference>,
}

impl ProjectGraph {
    /// Create an empty graph with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        ProjectGraph {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A buildable target defined directly in the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeTarget {
    pub name: String,

    /// Package products the target links against
    pub package_product_dependencies: Vec<PackageProduct>,

    /// Declared target dependencies, in declaration order
    pub dependencies: Vec<TargetDependency>,
}

impl NativeTarget {
    pub fn new(name: impl Into<String>) -> Self {
        NativeTarget {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A dependency record of a native target.
///
/// Only dependencies on package products are of interest; target-to-target
/// dependencies carry no product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDependency {
    pub product: Option<PackageProduct>,
}

/// A product vended by a Swift package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageProduct {
    pub product_name: String,

    /// The remote package providing the product, if any
    pub package: Option<RemotePackageReference>,
}

/// A Swift package fetched from source control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemotePackageReference {
    pub name: Option<String>,

    /// Repository URL exactly as written in the descriptor
    pub repository_url: Option<String>,
}

/// A reference to a file or folder in the project navigator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReference {
    /// File kind tag, e.g. `folder` or `sourcecode.swift`
    pub last_known_file_type: Option<String>,
    pub name: Option<String>,

    /// Path relative to the project's source root
    pub path: Option<String>,
}
