//! Fluent assertions over parsed records

use crate::instinct::record::{InstinctRecord, MetadataValue};
use crate::instinct::testing::matchers::TextMatch;

/// Create an assertion builder for a list of records
pub fn assert_records(records: &[InstinctRecord]) -> RecordsAssertion<'_> {
    RecordsAssertion { records }
}

fn summarize(records: &[InstinctRecord]) -> String {
    records
        .iter()
        .map(|r| match r.id() {
            Some(id) => format!("{}@{}", id, r.line),
            None => format!("<no id>@{}", r.line),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct RecordsAssertion<'a> {
    records: &'a [InstinctRecord],
}

impl<'a> RecordsAssertion<'a> {
    /// Assert the number of records
    pub fn count(self, expected: usize) -> Self {
        let actual = self.records.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} records, found {} records: [{}]",
            expected,
            actual,
            summarize(self.records)
        );
        self
    }

    /// Assert on a specific record by index
    pub fn record<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(RecordAssertion<'a>),
    {
        assert!(
            index < self.records.len(),
            "Record index {} out of bounds (found {} records: [{}])",
            index,
            self.records.len(),
            summarize(self.records)
        );
        assertion(RecordAssertion {
            record: &self.records[index],
            context: format!("records[{}]", index),
        });
        self
    }

    /// Assert the ids of all records, in order
    pub fn ids(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.id().unwrap_or("<no id>"))
            .collect();
        assert_eq!(actual, expected, "Record ids differ");
        self
    }
}

pub struct RecordAssertion<'a> {
    pub(crate) record: &'a InstinctRecord,
    pub(crate) context: String,
}

impl<'a> RecordAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        self.string_value("id", expected)
    }

    pub fn trigger(self, expected: &str) -> Self {
        self.string_value("trigger", expected)
    }

    pub fn domain(self, expected: &str) -> Self {
        self.string_value("domain", expected)
    }

    pub fn confidence(self, expected: f64) -> Self {
        let actual = self.record.confidence();
        assert!(
            actual.is_some_and(|c| (c - expected).abs() < f64::EPSILON),
            "{}: Expected confidence {}, found {:?}",
            self.context,
            expected,
            actual
        );
        self
    }

    /// Assert a metadata key holds exactly this value
    pub fn value(self, key: &str, expected: MetadataValue) -> Self {
        let actual = self.record.get(key);
        assert_eq!(
            actual,
            Some(&expected),
            "{}: Expected metadata {:?} to be {:?}, found {:?}",
            self.context,
            key,
            expected,
            actual
        );
        self
    }

    pub fn lacks_key(self, key: &str) -> Self {
        assert!(
            !self.record.metadata.contains_key(key),
            "{}: Expected no metadata {:?}, found {:?}",
            self.context,
            key,
            self.record.get(key)
        );
        self
    }

    pub fn metadata_len(self, expected: usize) -> Self {
        let actual = self.record.metadata.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} metadata keys, found {} ({:?})",
            self.context,
            expected,
            actual,
            self.record.metadata.keys().collect::<Vec<_>>()
        );
        self
    }

    pub fn line(self, expected: usize) -> Self {
        assert_eq!(
            self.record.line, expected,
            "{}: Expected record to open at line {}, found {}",
            self.context, expected, self.record.line
        );
        self
    }

    pub fn content(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.record.content, &self.context);
        self
    }

    pub fn content_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.record.content, &self.context);
        self
    }

    pub fn content_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.record.content, &self.context);
        self
    }

    pub fn content_excludes(self, substring: &str) -> Self {
        TextMatch::Excludes(substring.to_string()).assert(&self.record.content, &self.context);
        self
    }

    pub fn empty_content(self) -> Self {
        self.content("")
    }

    fn string_value(self, key: &str, expected: &str) -> Self {
        let actual = self.record.get(key);
        assert_eq!(
            actual.and_then(MetadataValue::as_str),
            Some(expected),
            "{}: Expected {} {:?}, found {:?}",
            self.context,
            key,
            expected,
            actual
        );
        self
    }
}
