//! Line scanning
//!
//!     The parser works one line at a time. [`SourceLines`] walks the source and yields each
//!     line together with its 1-based number and byte range, so content spans can be sliced
//!     straight out of the original text. [`classify_metadata_line`] decides what a line inside
//!     a metadata block holds.
//!
//!     A fence is a line that is exactly `---`. A trailing `\r` from CRLF input is tolerated,
//!     any other surrounding whitespace is not.

use crate::instinct::record::MetadataValue;
use once_cell::sync::Lazy;
use regex::Regex;

pub const FENCE: &str = "---";

/// `key: value`, split on the first colon. Keys may not start with whitespace, `:` or `#`.
static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^\s:#][^:]*?)\s*:(.*)$").expect("valid entry regex"));

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("valid int regex"));

static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.\d*|\.\d+|\d+)([eE][+-]?\d+)?$").expect("valid float regex")
});

/// A single line of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Line text without its terminator
    pub text: &'a str,
    /// Byte offset of the first character of the line
    pub start: usize,
    /// Byte offset just past the line terminator
    pub end: usize,
}

impl<'a> SourceLine<'a> {
    pub fn is_fence(&self) -> bool {
        is_fence(self.text)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Iterator over the lines of a source string
pub struct SourceLines<'a> {
    source: &'a str,
    offset: usize,
    number: usize,
}

impl<'a> SourceLines<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            number: 0,
        }
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.source.len() {
            return None;
        }
        let rest = &self.source[self.offset..];
        let (text, consumed) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.number += 1;
        let line = SourceLine {
            number: self.number,
            text,
            start: self.offset,
            end: self.offset + consumed,
        };
        self.offset += consumed;
        Some(line)
    }
}

/// Check whether a line (without its `\n`) is a `---` fence
pub fn is_fence(text: &str) -> bool {
    text.strip_suffix('\r').unwrap_or(text) == FENCE
}

/// What a line inside a metadata block holds
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataLine<'a> {
    Entry { key: &'a str, value: MetadataValue },
    /// Blank or `#` comment line, ignored
    Skip,
    /// Anything without `key: value` shape
    Invalid,
}

pub fn classify_metadata_line(text: &str) -> MetadataLine<'_> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return MetadataLine::Skip;
    }
    match ENTRY.captures(text) {
        Some(caps) => {
            let key = caps.get(1).map_or("", |m| m.as_str());
            let raw = caps.get(2).map_or("", |m| m.as_str());
            MetadataLine::Entry {
                key,
                value: parse_scalar(raw),
            }
        }
        None => MetadataLine::Invalid,
    }
}

/// Interpret a raw metadata value
///
/// Values wrapped in a matching pair of `"` or `'` are unquoted and stay strings. Bare
/// integers and decimals become numbers. Everything else is kept as trimmed text.
pub fn parse_scalar(raw: &str) -> MetadataValue {
    let value = raw.trim();
    if let Some(inner) = unquote(value) {
        return MetadataValue::String(inner.to_string());
    }
    if INTEGER.is_match(value) {
        if let Ok(i) = value.parse::<i64>() {
            return MetadataValue::Integer(i);
        }
    }
    if FLOAT.is_match(value) {
        if let Ok(f) = value.parse::<f64>() {
            return MetadataValue::Float(f);
        }
    }
    MetadataValue::String(value.to_string())
}

fn unquote(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    ['"', '\'']
        .into_iter()
        .find(|q| value.starts_with(*q) && value.ends_with(*q))
        .map(|_| &value[1..value.len() - 1])
}

/// Drop whole blank lines from the start of `text`
pub fn strip_leading_blank_lines(text: &str) -> &str {
    let mut offset = 0;
    for line in SourceLines::new(text) {
        if !line.is_blank() {
            break;
        }
        offset = line.end;
    }
    &text[offset..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn lines_carry_numbers_and_offsets() {
        let lines: Vec<_> = SourceLines::new("a\nbc\n\nd").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!((lines[1].number, lines[1].text), (2, "bc"));
        assert_eq!((lines[1].start, lines[1].end), (2, 5));
        assert!(lines[2].is_blank());
        assert_eq!((lines[3].text, lines[3].end), ("d", 7));
    }

    #[test]
    fn empty_source_has_no_lines() {
        assert_eq!(SourceLines::new("").count(), 0);
    }

    #[rstest]
    #[case("---", true)]
    #[case("---\r", true)]
    #[case(" ---", false)]
    #[case("--- ", false)]
    #[case("----", false)]
    #[case("- --", false)]
    fn fence_detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_fence(text), expected);
    }

    #[rstest]
    #[case("\"when coding\"", MetadataValue::from("when coding"))]
    #[case("'single'", MetadataValue::from("single"))]
    #[case("\"0.9\"", MetadataValue::from("0.9"))]
    #[case("0.9", MetadataValue::Float(0.9))]
    #[case("-3", MetadataValue::Integer(-3))]
    #[case("1e3", MetadataValue::Float(1000.0))]
    #[case("general", MetadataValue::from("general"))]
    #[case("nan", MetadataValue::from("nan"))]
    #[case("\"unbalanced", MetadataValue::from("\"unbalanced"))]
    #[case("  padded  ", MetadataValue::from("padded"))]
    #[case("", MetadataValue::from(""))]
    fn scalar_interpretation(#[case] raw: &str, #[case] expected: MetadataValue) {
        assert_eq!(parse_scalar(raw), expected);
    }

    #[test]
    fn entry_splits_on_first_colon() {
        assert_eq!(
            classify_metadata_line("source: https://example.com"),
            MetadataLine::Entry {
                key: "source",
                value: MetadataValue::from("https://example.com"),
            }
        );
    }

    #[rstest]
    #[case("", MetadataLine::Skip)]
    #[case("   ", MetadataLine::Skip)]
    #[case("# note", MetadataLine::Skip)]
    #[case("no separator here", MetadataLine::Invalid)]
    #[case(": orphan value", MetadataLine::Invalid)]
    fn non_entry_lines(#[case] text: &str, #[case] expected: MetadataLine<'static>) {
        assert_eq!(classify_metadata_line(text), expected);
    }

    #[test]
    fn strips_only_whole_blank_lines() {
        assert_eq!(strip_leading_blank_lines("\n  \n  indented\n\n"), "  indented\n\n");
        assert_eq!(strip_leading_blank_lines("\n\n"), "");
        assert_eq!(strip_leading_blank_lines("body"), "body");
    }
}
