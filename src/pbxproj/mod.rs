//! Xcode `project.pbxproj` support.
//!
//! An `.xcodeproj` bundle is a directory; its object graph lives in the
//! `project.pbxproj` file inside it, written as an old-style (OpenStep)
//! property list:
//!
//! ```text
//! // !$*UTF8*$!
//! {
//!     archiveVersion = 1;
//!     objectVersion = 56;
//!     objects = {
//!         8A1F... /* App */ = {isa = PBXNativeTarget; name = App; ...};
//!         ...
//!     };
//!     rootObject = 8A0C... /* Project object */;
//! }
//! ```
//!
//! [`PbxprojLoader`] reads that file and resolves the object table into a
//! [`ProjectGraph`](crate::core::ProjectGraph).

pub mod error;
pub mod objects;
pub mod parser;
pub mod value;

use std::path::{Path, PathBuf};

use crate::core::{ProjectGraph, ProjectLoader};
use crate::util::fs::{absolutize_cwd, file_name};

pub use error::{PbxprojError, SyntaxError};
pub use value::{Dictionary, Value};

/// File name of the descriptor inside an `.xcodeproj` bundle.
pub const DESCRIPTOR_FILE: &str = "project.pbxproj";

/// Extension of Xcode project bundles.
pub const BUNDLE_EXTENSION: &str = "xcodeproj";

/// Loads project graphs from `.xcodeproj` bundles on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PbxprojLoader;

impl PbxprojLoader {
    pub fn new() -> Self {
        PbxprojLoader
    }
}

impl ProjectLoader for PbxprojLoader {
    type Error = PbxprojError;

    fn load(&self, path: &Path) -> Result<ProjectGraph, PbxprojError> {
        let (bundle, descriptor) = bundle_paths(&absolutize_cwd(path));

        let contents =
            std::fs::read_to_string(&descriptor).map_err(|source| PbxprojError::Read {
                path: descriptor.clone(),
                source,
            })?;

        let name = file_name(&bundle).unwrap_or_else(|| bundle.display().to_string());
        let graph = parse_str(name, &descriptor.display().to_string(), &contents)?;

        tracing::debug!(
            "Loaded {}: {} native targets, {} file references",
            descriptor.display(),
            graph.native_targets.len(),
            graph.file_references.len()
        );

        Ok(graph)
    }
}

/// Parse descriptor text into a project graph.
///
/// `name` becomes the graph's project name; `source_name` labels the text
/// in syntax error reports.
pub fn parse_str(
    name: impl Into<String>,
    source_name: &str,
    contents: &str,
) -> Result<ProjectGraph, PbxprojError> {
    let root = parser::parse(source_name, contents)?;
    objects::resolve(name, &root)
}

/// Split a user-supplied path into (bundle directory, descriptor file).
///
/// Accepts either the bundle itself or the `project.pbxproj` inside it.
pub fn bundle_paths(path: &Path) -> (PathBuf, PathBuf) {
    if path.file_name().is_some_and(|n| n == DESCRIPTOR_FILE) {
        let bundle = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (bundle, path.to_path_buf())
    } else {
        (path.to_path_buf(), path.join(DESCRIPTOR_FILE))
    }
}
