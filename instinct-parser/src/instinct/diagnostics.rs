//! Parse errors and diagnostics
//!
//!     Only one problem is always fatal: a metadata block that is opened and never closed.
//!     Dropping it silently would lose the rest of the document, so the parse fails and names
//!     the line of the opening fence.
//!
//!     Everything else is recoverable. A metadata line without `key: value` shape is skipped,
//!     text before the first metadata block is dropped, and (when ids are required) records
//!     without an `id` are left out. Each of these is reported as a [`Diagnostic`] on the
//!     parsed document. Strict parsing turns the first two into errors instead.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: metadata block is never closed with '---'")]
    UnterminatedFrontmatter { line: usize },
    #[error("line {line}: expected 'key: value' in metadata block, found {text:?}")]
    InvalidMetadataLine { line: usize, text: String },
    #[error("line {line}: text before the first metadata block")]
    UnexpectedPreamble { line: usize },
}

impl ParseError {
    /// 1-based line the error points at
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnterminatedFrontmatter { line }
            | ParseError::InvalidMetadataLine { line, .. }
            | ParseError::UnexpectedPreamble { line } => *line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Metadata line that was skipped, with its text
    InvalidMetadataLine(String),
    /// Text before the first metadata block
    Preamble,
    /// Record dropped because it has no `id`
    MissingId,
}

/// A non-fatal problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidMetadataLine(text) => write!(
                f,
                "line {}: skipping metadata line without 'key: value': {:?}",
                self.line, text
            ),
            DiagnosticKind::Preamble => write!(
                f,
                "line {}: ignoring text before the first metadata block",
                self.line
            ),
            DiagnosticKind::MissingId => {
                write!(f, "line {}: dropping record without an id", self.line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_their_line() {
        let err = ParseError::UnterminatedFrontmatter { line: 12 };
        assert_eq!(err.line(), 12);
        assert_eq!(
            err.to_string(),
            "line 12: metadata block is never closed with '---'"
        );
    }

    #[test]
    fn diagnostic_display() {
        let diag = Diagnostic::new(3, DiagnosticKind::InvalidMetadataLine("oops".into()));
        assert_eq!(
            diag.to_string(),
            "line 3: skipping metadata line without 'key: value': \"oops\""
        );
    }
}
