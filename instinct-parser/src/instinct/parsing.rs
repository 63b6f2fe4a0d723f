//! Instinct document parsing
//!
//!     Parsing is a single pass over the lines of the source. The scanner is always in one of
//!     three sections:
//!
//!         Preamble:     before the first fence. Blank lines are fine, anything else is
//!                       reported and dropped.
//!         Frontmatter:  between an opening and a closing fence. Each line is classified as a
//!                       metadata entry, a skippable line, or an invalid line.
//!         Body:         after a closing fence. Lines are not inspected, except that a fence
//!                       ends the body and opens the next record's metadata block.
//!
//!     A record's content is sliced straight out of the source: it runs from just after the
//!     closing fence to the start of the next opening fence (or the end of the source). Whole
//!     blank lines at its start are removed; everything else is kept verbatim. A metadata block
//!     that reaches the end of input therefore yields an empty content string, and content can
//!     never contain a fence line.
//!
//!     Because any `---` line in a body opens a new record, a markdown horizontal rule inside a
//!     body starts a metadata block. If nothing closes it the parse fails with
//!     [`ParseError::UnterminatedFrontmatter`].

use crate::instinct::diagnostics::{Diagnostic, DiagnosticKind, ParseError};
use crate::instinct::lines::{
    classify_metadata_line, is_fence, strip_leading_blank_lines, MetadataLine, SourceLine,
    SourceLines,
};
use crate::instinct::record::{InstinctRecord, Metadata};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How much whitespace to remove from record content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTrim {
    /// Remove blank lines before the body, keep the rest verbatim
    #[default]
    Leading,
    /// Also remove trailing whitespace
    Both,
}

/// Knobs for [`parse_instinct_file_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub content_trim: ContentTrim,
    /// Leave out records whose metadata has no `id`
    pub require_id: bool,
    /// Fail on invalid metadata lines and preamble text instead of skipping them
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Records plus the diagnostics collected while parsing them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub records: Vec<InstinctRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDocument {
    pub fn into_records(self) -> Vec<InstinctRecord> {
        self.records
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse an instinct file with default options
///
/// Returns one record per metadata block, in document order. Diagnostics are dropped (they
/// are still logged); use [`parse_instinct_file_with`] to inspect them.
pub fn parse_instinct_file(source: &str) -> Result<Vec<InstinctRecord>, ParseError> {
    parse_instinct_file_with(source, &ParseOptions::default()).map(ParsedDocument::into_records)
}

pub fn parse_instinct_file_with(
    source: &str,
    options: &ParseOptions,
) -> Result<ParsedDocument, ParseError> {
    let mut parser = DocumentParser::new(source, options);
    for line in SourceLines::new(source) {
        parser.feed(line)?;
    }
    parser.finish()
}

/// A record whose metadata block is being read, or whose body is being scanned
struct PendingRecord {
    line: usize,
    metadata: Metadata,
    frontmatter: String,
    body_start: usize,
}

impl PendingRecord {
    fn open(line: usize) -> Self {
        Self {
            line,
            metadata: Metadata::new(),
            frontmatter: String::new(),
            body_start: 0,
        }
    }
}

enum Section {
    Preamble { reported: bool },
    Frontmatter(PendingRecord),
    Body(PendingRecord),
}

struct DocumentParser<'a> {
    source: &'a str,
    options: &'a ParseOptions,
    section: Section,
    document: ParsedDocument,
}

impl<'a> DocumentParser<'a> {
    fn new(source: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            source,
            options,
            section: Section::Preamble { reported: false },
            document: ParsedDocument::default(),
        }
    }

    fn feed(&mut self, line: SourceLine<'_>) -> Result<(), ParseError> {
        let SourceLine {
            number,
            text,
            start,
            end,
        } = line;
        let fence = is_fence(text);
        let section = std::mem::replace(&mut self.section, Section::Preamble { reported: true });
        self.section = match section {
            Section::Preamble { .. } if fence => Section::Frontmatter(PendingRecord::open(number)),
            Section::Preamble { reported } => {
                let blank = text.trim().is_empty();
                if !blank && !reported {
                    if self.options.strict {
                        return Err(ParseError::UnexpectedPreamble { line: number });
                    }
                    self.report(Diagnostic::new(number, DiagnosticKind::Preamble));
                }
                Section::Preamble {
                    reported: reported || !blank,
                }
            }
            Section::Frontmatter(mut record) if fence => {
                record.body_start = end;
                Section::Body(record)
            }
            Section::Frontmatter(mut record) => {
                self.read_metadata_line(&mut record, number, text)?;
                Section::Frontmatter(record)
            }
            Section::Body(record) if fence => {
                self.close(record, start);
                Section::Frontmatter(PendingRecord::open(number))
            }
            body @ Section::Body(_) => body,
        };
        Ok(())
    }

    fn read_metadata_line(
        &mut self,
        record: &mut PendingRecord,
        number: usize,
        text: &str,
    ) -> Result<(), ParseError> {
        let text = text.strip_suffix('\r').unwrap_or(text);
        match classify_metadata_line(text) {
            MetadataLine::Entry { key, value } => {
                record.metadata.insert(key, value);
            }
            MetadataLine::Skip => {}
            MetadataLine::Invalid => {
                if self.options.strict {
                    return Err(ParseError::InvalidMetadataLine {
                        line: number,
                        text: text.to_string(),
                    });
                }
                self.report(Diagnostic::new(
                    number,
                    DiagnosticKind::InvalidMetadataLine(text.to_string()),
                ));
            }
        }
        record.frontmatter.push_str(text);
        record.frontmatter.push('\n');
        Ok(())
    }

    /// Turn a pending record into an [`InstinctRecord`], its body ending at `body_end`
    fn close(&mut self, pending: PendingRecord, body_end: usize) {
        let source = self.source;
        let body = strip_leading_blank_lines(&source[pending.body_start..body_end]);
        let content = match self.options.content_trim {
            ContentTrim::Leading => body,
            ContentTrim::Both => body.trim_end(),
        };

        if self.options.require_id && !pending.metadata.contains_key("id") {
            self.report(Diagnostic::new(pending.line, DiagnosticKind::MissingId));
            return;
        }

        debug!(
            "line {}: parsed instinct {:?} ({} metadata keys, {} content bytes)",
            pending.line,
            pending.metadata.get("id").map(|id| id.to_string()),
            pending.metadata.len(),
            content.len()
        );
        self.document.records.push(InstinctRecord {
            metadata: pending.metadata,
            content: content.to_string(),
            line: pending.line,
            frontmatter: pending.frontmatter,
        });
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.document.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> Result<ParsedDocument, ParseError> {
        let section = std::mem::replace(&mut self.section, Section::Preamble { reported: true });
        match section {
            Section::Preamble { .. } => {}
            Section::Frontmatter(record) => {
                return Err(ParseError::UnterminatedFrontmatter { line: record.line })
            }
            Section::Body(record) => {
                let end = self.source.len();
                self.close(record, end);
            }
        }
        Ok(self.document)
    }
}
