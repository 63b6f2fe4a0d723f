//! Testing utilities for instinct records
//!
//!     Tests should follow two rules:
//!
//!         1. Use the curated sample files through [Fixture] instead of writing instinct
//!            text inline. A fixture is parsed by every test that needs that shape of input,
//!            so a format change means fixing one file, not hunting for strings.
//!         2. Check records with [assert_records](fn@assert_records) instead of indexing into
//!            vectors and fields by hand.
//!
//!     Inline text is fine for unit tests of the scanner itself, where the exact bytes are
//!     the point of the test.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use instinct_parser::instinct::testing::{assert_records, Fixture};
//!
//!     let records = Fixture::MultiSection.parse();
//!
//!     assert_records(&records)
//!         .count(2)
//!         .record(0, |r| {
//!             r.id("instinct-a")
//!                 .confidence(0.9)
//!                 .content_contains("Do thing A.");
//!         })
//!         .record(1, |r| {
//!             r.domain("testing");
//!         });
//!     ```

mod fixtures;
mod matchers;
mod record_assertions;

pub use fixtures::Fixture;
pub use matchers::TextMatch;
pub use record_assertions::{assert_records, RecordAssertion, RecordsAssertion};
