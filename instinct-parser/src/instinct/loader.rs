//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading instinct text from files
//! or strings and parsing it. This is used by both production code and tests.
//!
//! # Example
//!
//! ```rust
//! use instinct_parser::instinct::loader::DocumentLoader;
//!
//! // From file
//! let records = DocumentLoader::from_path("personal.md")?.parse()?;
//!
//! // From string, keeping diagnostics
//! let doc = DocumentLoader::from_string("---\nid: a\n---\n").parse_with(&ParseOptions::default())?;
//! ```

use crate::instinct::diagnostics::ParseError;
use crate::instinct::parsing::{parse_instinct_file_with, ParseOptions, ParsedDocument};
use crate::instinct::record::InstinctRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: ParseError,
    },
}

/// Document loader
///
/// Holds the source text and where it came from, so parse errors can name their origin.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
    origin: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DocumentLoader {
            source,
            origin: path.display().to_string(),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            origin: "<string>".to_string(),
        }
    }

    /// Name the origin used in error messages (e.g. `<stdin>`)
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Parse the source with default options
    pub fn parse(&self) -> Result<Vec<InstinctRecord>, LoaderError> {
        self.parse_with(&ParseOptions::default())
            .map(ParsedDocument::into_records)
    }

    /// Parse the source with the given options, keeping diagnostics
    pub fn parse_with(&self, options: &ParseOptions) -> Result<ParsedDocument, LoaderError> {
        parse_instinct_file_with(&self.source, options).map_err(|source| LoaderError::Parse {
            origin: self.origin.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instinct::testing::Fixture;

    #[test]
    fn loads_fixture_from_path() {
        let records = DocumentLoader::from_path(Fixture::Single.path())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), Some("solo"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = DocumentLoader::from_path("does/not/exist.md").unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read does/not/exist.md"));
    }

    #[test]
    fn parse_errors_name_their_origin() {
        let err = DocumentLoader::from_string("---\nid: a\n")
            .with_origin("<stdin>")
            .parse()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "<stdin>: line 1: metadata block is never closed with '---'"
        );
    }
}
