//! Curated instinct sample files
//!
//!     Every fixture lives under `fixtures/` in the crate root and is embedded at compile
//!     time, so tests never depend on the working directory.

use crate::instinct::diagnostics::ParseError;
use crate::instinct::parsing::{
    parse_instinct_file, parse_instinct_file_with, ParseOptions, ParsedDocument,
};
use crate::instinct::record::InstinctRecord;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// Two records, `instinct-a` and `instinct-b`, each with a body
    MultiSection,
    /// One record, `solo`, with `## Action` and `## Evidence` sections
    Single,
    /// One record, `empty`, with nothing after the closing fence
    EmptyBody,
    /// One record whose metadata block holds a line without `key: value`
    InvalidMetadataLine,
    /// A body containing a `---` rule that is never closed
    Unterminated,
    /// Free text before the first metadata block
    Preamble,
}

impl Fixture {
    pub const ALL: [Fixture; 6] = [
        Fixture::MultiSection,
        Fixture::Single,
        Fixture::EmptyBody,
        Fixture::InvalidMetadataLine,
        Fixture::Unterminated,
        Fixture::Preamble,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Fixture::MultiSection => "multi-section.md",
            Fixture::Single => "single.md",
            Fixture::EmptyBody => "empty-body.md",
            Fixture::InvalidMetadataLine => "invalid-metadata-line.md",
            Fixture::Unterminated => "unterminated.md",
            Fixture::Preamble => "preamble.md",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Fixture::MultiSection => include_str!("../../../fixtures/multi-section.md"),
            Fixture::Single => include_str!("../../../fixtures/single.md"),
            Fixture::EmptyBody => include_str!("../../../fixtures/empty-body.md"),
            Fixture::InvalidMetadataLine => {
                include_str!("../../../fixtures/invalid-metadata-line.md")
            }
            Fixture::Unterminated => include_str!("../../../fixtures/unterminated.md"),
            Fixture::Preamble => include_str!("../../../fixtures/preamble.md"),
        }
    }

    /// Absolute path of the fixture file, for loader and CLI tests
    pub fn path(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(self.file_name())
    }

    /// Parse with default options, panicking on error
    pub fn parse(&self) -> Vec<InstinctRecord> {
        parse_instinct_file(self.source()).unwrap_or_else(|e| {
            panic!("fixture {} failed to parse: {}", self.file_name(), e)
        })
    }

    pub fn parse_with(&self, options: &ParseOptions) -> Result<ParsedDocument, ParseError> {
        parse_instinct_file_with(self.source(), options)
    }
}
