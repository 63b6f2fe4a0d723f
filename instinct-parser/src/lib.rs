//! # instinct-parser
//!
//! A parser for instinct files.
//!
//! An instinct file is one or more records concatenated together. Every record opens with a
//! metadata block fenced by `---` lines and holding `key: value` pairs, followed by free-form
//! body text that runs until the next record's opening fence (or the end of the file):
//!
//!     ---
//!     id: instinct-a
//!     trigger: "when coding"
//!     confidence: 0.9
//!     domain: general
//!     ---
//!
//!     ## Action
//!     Do thing A.
//!
//! File Layout
//!
//!     src/instinct
//!       ├── record       The parsed data model (records, metadata values)
//!       ├── lines        Line scanning and metadata line classification
//!       ├── parsing      The document parser and its options
//!       ├── diagnostics  Errors and non-fatal warnings
//!       ├── loader       Loading documents from files or strings
//!       ├── rendering    Writing records back to instinct text
//!       └── testing      Fixtures and fluent record assertions
//!
//! For testing guidelines, see the [testing module](instinct::testing).

pub mod instinct;
