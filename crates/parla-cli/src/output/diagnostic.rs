//! Miette diagnostic wrapper for catalog load errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use parla::LoadError;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed catalogs.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(parla::catalog))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a LoadError with source context.
    ///
    /// Returns `None` for errors without a position in `content` (I/O).
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Option<Self> {
        let (offset, message, help) = match err {
            LoadError::Json {
                line,
                column,
                message,
                ..
            } => (
                line_column_offset(content, *line, *column),
                format!("invalid JSON: {message}"),
                None,
            ),
            LoadError::Io { .. } => return None,
        };

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        Some(CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        })
    }
}

/// Convert line:column to byte offset.
///
/// Sum of (line_length + 1) for lines before the error line, plus column.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1)
}

