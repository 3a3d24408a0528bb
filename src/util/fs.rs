//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Filesystem queries made while extracting a project.
///
/// Extraction only ever asks whether a path exists, so that is all this
/// trait covers. Tests substitute an in-memory implementation.
pub trait FileSystem {
    /// Check if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Make a path absolute against `base` without touching the filesystem.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Make a path absolute against the current directory. Returns the path
/// unchanged if the current directory is unavailable.
pub fn absolutize_cwd(path: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => absolutize(&cwd, path),
        Err(_) => path.to_path_buf(),
    }
}

/// Get the file name of a path as a string, if it has one.
pub fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
