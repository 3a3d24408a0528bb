//! Errors raised while opening a `project.pbxproj`.

use std::io;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Failure to open, parse, or resolve a project descriptor.
#[derive(Debug, Error, Diagnostic)]
pub enum PbxprojError {
    #[error("failed to read project descriptor: {}", path.display())]
    #[diagnostic(
        code(xcsummary::pbxproj::read),
        help("Pass the path of an .xcodeproj bundle or of its project.pbxproj")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("project descriptor has no `objects` table")]
    #[diagnostic(code(xcsummary::pbxproj::missing_objects))]
    MissingObjects,

    #[error("object `{id}` is malformed: {reason}")]
    #[diagnostic(code(xcsummary::pbxproj::invalid_object))]
    InvalidObject { id: String, reason: String },

    #[error("{isa} `{id}` is missing required field `{field}`")]
    #[diagnostic(code(xcsummary::pbxproj::missing_field))]
    MissingField {
        id: String,
        isa: String,
        field: &'static str,
    },
}

/// A syntax error in the property list text, with its location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message} at line {line}, column {column}")]
#[diagnostic(code(xcsummary::pbxproj::syntax))]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: SourceSpan,
}

impl SyntaxError {
    /// Build a syntax error pointing at `offset..offset + len` in `input`.
    pub fn new(
        message: impl Into<String>,
        name: &str,
        input: &str,
        offset: usize,
        len: usize,
    ) -> Self {
        let (line, column) = line_column(input, offset);
        SyntaxError {
            message: message.into(),
            line,
            column,
            src: NamedSource::new(name, input.to_string()),
            span: (offset, len).into(),
        }
    }

    /// Byte offset of the offending token.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

/// 1-based line and column of a byte offset.
fn line_column(input: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(input.len());
    let before = &input[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
