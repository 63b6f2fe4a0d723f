//! Rendering records back to instinct text
//!
//!     A record renders as its fenced metadata block, then one blank line, then its content.
//!     Records without content render as the bare metadata block. Since parsing strips leading
//!     blank lines from content, re-parsing the rendered text yields the same records as long
//!     as every content ends with a newline.

use crate::instinct::lines::FENCE;
use crate::instinct::record::InstinctRecord;

impl InstinctRecord {
    /// Render this record as instinct text
    pub fn to_source(&self) -> String {
        let mut out = String::with_capacity(self.frontmatter.len() + self.content.len() + 16);
        write_record(&mut out, self);
        out
    }
}

/// Render a list of records as one instinct document
///
/// A newline is inserted between records whose content does not end with one, so the next
/// opening fence always starts its own line.
pub fn render_document(records: &[InstinctRecord]) -> String {
    let mut out = String::new();
    for record in records {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        write_record(&mut out, record);
    }
    out
}

fn write_record(out: &mut String, record: &InstinctRecord) {
    out.push_str(FENCE);
    out.push('\n');
    out.push_str(&record.frontmatter);
    out.push_str(FENCE);
    out.push('\n');
    if record.has_content() {
        out.push('\n');
        out.push_str(&record.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instinct::parsing::parse_instinct_file;

    #[test]
    fn renders_fenced_block_and_content() {
        let records = parse_instinct_file("---\nid: a\n---\n\nBody\n").unwrap();
        assert_eq!(records[0].to_source(), "---\nid: a\n---\n\nBody\n");
    }

    #[test]
    fn body_less_record_renders_without_blank_line() {
        let records = parse_instinct_file("---\nid: empty\n---\n").unwrap();
        assert_eq!(records[0].to_source(), "---\nid: empty\n---\n");
    }

    #[test]
    fn separates_records_missing_a_trailing_newline() {
        let mut records = parse_instinct_file("---\nid: a\n---\nA\n---\nid: b\n---\nB\n").unwrap();
        records[0].content = "A".to_string();

        let rendered = render_document(&records);
        assert_eq!(rendered, "---\nid: a\n---\n\nA\n---\nid: b\n---\n\nB\n");
        assert_eq!(parse_instinct_file(&rendered).unwrap().len(), 2);
    }
}
