//! Main module for instinct library functionality

pub mod diagnostics;
pub mod lines;
pub mod loader;
pub mod parsing;
pub mod record;
pub mod rendering;
pub mod testing;

pub use diagnostics::{Diagnostic, DiagnosticKind, ParseError};
pub use loader::{DocumentLoader, LoaderError};
pub use parsing::{
    parse_instinct_file, parse_instinct_file_with, ContentTrim, ParseOptions, ParsedDocument,
};
pub use record::{InstinctRecord, Metadata, MetadataValue};
pub use rendering::render_document;
