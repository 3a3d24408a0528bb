//! Core data structures for xcsummary.
//!
//! This module contains the types shared by every other module:
//! - The project object graph read from a descriptor
//! - The loader seam that produces it
//! - The normalized project summary

pub mod graph;
pub mod loader;
pub mod project;

pub use graph::{
    FileReference, NativeTarget, PackageProduct, ProjectGraph, RemotePackageReference,
    TargetDependency,
};
pub use loader::ProjectLoader;
pub use project::{Project, SwiftPackage, Target};
