//! High-level operations.
//!
//! This module contains the implementation of xcsummary commands.

pub mod extract;
pub mod locate;
pub mod parse;

pub use extract::{extract, ProjectExtractor, FOLDER_FILE_TYPE, PACKAGE_MANIFEST};
pub use locate::{find_project, LocateError};
pub use parse::{parse_project, ProjectParser};
