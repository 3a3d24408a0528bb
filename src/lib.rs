//! xcsummary - summarize Xcode projects
//!
//! This crate reads an `.xcodeproj` bundle and reports its native targets
//! together with the Swift packages they depend on, both remote packages
//! fetched from a repository and local packages living in the source tree.

pub mod core;
pub mod ops;
pub mod pbxproj;
pub mod util;

/// Test utilities and mocks for xcsummary unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides an in-memory filesystem and builders for project graphs and
/// `project.pbxproj` fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{Project, ProjectGraph, ProjectLoader, SwiftPackage, Target};
pub use ops::{extract, parse_project, ProjectExtractor, ProjectParser};
pub use pbxproj::{PbxprojError, PbxprojLoader};
pub use util::context::GlobalContext;
