//! Parsing the curated instinct fixtures
//!
//! Each fixture is checked through the fluent record assertions:
//! - record count and order
//! - typed metadata
//! - exact content spans, not just substrings, where the span matters

use instinct_parser::instinct::testing::{assert_records, Fixture};
use instinct_parser::instinct::{
    parse_instinct_file, parse_instinct_file_with, ContentTrim, DiagnosticKind, MetadataValue,
    ParseError, ParseOptions,
};
use rstest::rstest;

#[test]
fn test_multiple_instincts_preserve_content() {
    let records = Fixture::MultiSection.parse();

    assert_records(&records)
        .count(2)
        .ids(&["instinct-a", "instinct-b"])
        .record(0, |r| {
            r.trigger("when coding")
                .confidence(0.9)
                .domain("general")
                .content_contains("Do thing A.")
                .content_contains("Example A1")
                .content_excludes("Do thing B.");
        })
        .record(1, |r| {
            r.trigger("when testing")
                .confidence(0.7)
                .domain("testing")
                .line(14)
                .content_contains("Do thing B.");
        });
}

#[test]
fn test_single_instinct_preserves_content() {
    let records = Fixture::Single.parse();

    assert_records(&records).count(1).record(0, |r| {
        r.id("solo")
            .content_starts_with("## Action\n")
            .content_contains("Check for security issues.")
            .content_contains("## Evidence")
            .content_contains("Prevents vulnerabilities.");
    });
}

#[test]
fn test_empty_content_no_error() {
    let records = Fixture::EmptyBody.parse();

    assert_records(&records).count(1).record(0, |r| {
        r.id("empty").trigger("placeholder").empty_content();
    });
}

#[test]
fn test_content_keeps_trailing_blank_line_before_next_block() {
    let records = Fixture::MultiSection.parse();

    assert_records(&records).record(0, |r| {
        r.content("## Action\nDo thing A.\n\n## Examples\n- Example A1\n\n");
    });
}

#[test]
fn test_invalid_metadata_line_is_skipped() {
    let doc = Fixture::InvalidMetadataLine
        .parse_with(&ParseOptions::default())
        .unwrap();

    assert_records(&doc.records).count(1).record(0, |r| {
        r.id("sloppy")
            .metadata_len(3)
            .confidence(0.6)
            .content("## Action\nRebase before merging.\n");
    });
    assert_eq!(doc.diagnostics.len(), 1);
    assert_eq!(doc.diagnostics[0].line, 4);
    assert_eq!(
        doc.diagnostics[0].kind,
        DiagnosticKind::InvalidMetadataLine("this line has no separator".to_string())
    );
}

#[test]
fn test_unterminated_block_names_its_opening_line() {
    let err = parse_instinct_file(Fixture::Unterminated.source()).unwrap_err();
    assert_eq!(err, ParseError::UnterminatedFrontmatter { line: 9 });
}

#[test]
fn test_preamble_is_dropped() {
    let doc = Fixture::Preamble.parse_with(&ParseOptions::default()).unwrap();

    assert_records(&doc.records).count(1).record(0, |r| {
        r.id("prefer-small-commits")
            .line(4)
            .domain("git")
            .value("source", MetadataValue::from("session-observation"))
            .content_excludes("Exported by hand.");
    });
    assert_eq!(doc.diagnostics[0].kind, DiagnosticKind::Preamble);
}

#[rstest]
#[case(Fixture::InvalidMetadataLine, 4)]
#[case(Fixture::Preamble, 1)]
fn test_strict_mode_fails_where_lenient_mode_warns(#[case] fixture: Fixture, #[case] line: usize) {
    let lenient = fixture.parse_with(&ParseOptions::default()).unwrap();
    assert!(lenient.has_diagnostics());

    let err = fixture.parse_with(&ParseOptions::strict()).unwrap_err();
    assert_eq!(err.line(), line);
}

#[rstest]
#[case(Fixture::MultiSection, 2)]
#[case(Fixture::Single, 1)]
#[case(Fixture::EmptyBody, 1)]
#[case(Fixture::InvalidMetadataLine, 1)]
#[case(Fixture::Preamble, 1)]
fn test_record_count_matches_metadata_blocks(#[case] fixture: Fixture, #[case] expected: usize) {
    assert_records(&fixture.parse()).count(expected);
}

#[rstest]
#[case(Fixture::MultiSection)]
#[case(Fixture::Single)]
#[case(Fixture::EmptyBody)]
fn test_strict_mode_accepts_well_formed_files(#[case] fixture: Fixture) {
    let doc = fixture.parse_with(&ParseOptions::strict()).unwrap();
    assert!(!doc.has_diagnostics());
    assert_eq!(doc.records, fixture.parse());
}

#[test]
fn test_trim_both_matches_stripped_content() {
    let options = ParseOptions {
        content_trim: ContentTrim::Both,
        ..ParseOptions::default()
    };
    let doc = parse_instinct_file_with(Fixture::Single.source(), &options).unwrap();

    assert_records(&doc.records).record(0, |r| {
        r.content(
            "## Action\nCheck for security issues.\n\n## Evidence\nPrevents vulnerabilities.",
        );
    });
}

#[test]
fn test_every_fixture_path_exists() {
    for fixture in Fixture::ALL {
        assert!(fixture.path().is_file(), "missing {}", fixture.file_name());
    }
}
