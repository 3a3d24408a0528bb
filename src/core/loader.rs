//! Loader trait - the seam between a descriptor format and the extractor.

use std::path::Path;

use crate::core::ProjectGraph;

/// Opens a project descriptor and produces its object graph.
///
/// Implementations own their error type. Callers hand it back to their own
/// callers unchanged, so a loader should make its errors self-explanatory.
pub trait ProjectLoader {
    /// Error produced when the descriptor cannot be opened or parsed.
    type Error;

    /// Load the object graph of the project at `path`.
    fn load(&self, path: &Path) -> Result<ProjectGraph, Self::Error>;
}

impl<L: ProjectLoader + ?Sized> ProjectLoader for &L {
    type Error = L::Error;

    fn load(&self, path: &Path) -> Result<ProjectGraph, Self::Error> {
        (**self).load(path)
    }
}
