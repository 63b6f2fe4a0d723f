//! Instinct records
//!
//!     An [`InstinctRecord`] is one parsed section of an instinct file: the key/value pairs of
//!     its metadata block plus the body text that follows it. Records are plain values. They are
//!     built fresh by every parse and carry no identity beyond their position in the result.
//!
//!     Metadata values are scalars. The parser keeps quoted values as strings and turns bare
//!     numbers into [`MetadataValue::Integer`] or [`MetadataValue::Float`], so a `confidence`
//!     of `0.9` can be read back as a number without any schema.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A scalar metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Integer(i64),
    Float(f64),
    String(String),
}

impl MetadataValue {
    /// The value as text, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetadataValue::Integer(i) => Some(*i as f64),
            MetadataValue::Float(f) => Some(*f),
            MetadataValue::String(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        !matches!(self, MetadataValue::String(_))
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Integer(i) => write!(f, "{}", i),
            MetadataValue::Float(x) => write!(f, "{}", x),
            MetadataValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::String(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::String(s)
    }
}

impl From<i64> for MetadataValue {
    fn from(i: i64) -> Self {
        MetadataValue::Integer(i)
    }
}

impl From<f64> for MetadataValue {
    fn from(f: f64) -> Self {
        MetadataValue::Float(f)
    }
}

/// Insertion-ordered metadata of a record
///
/// Keys keep the order they had in the metadata block. Inserting a key that is already
/// present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<MetadataValue>> FromIterator<(K, V)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

/// One parsed section of an instinct file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstinctRecord {
    /// Key/value pairs from the metadata block
    pub metadata: Metadata,
    /// Body text following the metadata block, leading blank lines removed
    pub content: String,
    /// 1-based line of the record's opening `---`
    pub line: usize,
    /// Raw metadata lines (between the fences), each terminated by `\n`
    #[serde(skip)]
    pub frontmatter: String,
}

impl InstinctRecord {
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(MetadataValue::as_str)
    }

    pub fn trigger(&self) -> Option<&str> {
        self.get("trigger").and_then(MetadataValue::as_str)
    }

    pub fn domain(&self) -> Option<&str> {
        self.get("domain").and_then(MetadataValue::as_str)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.get("confidence").and_then(MetadataValue::as_f64)
    }

    /// True when the metadata block was followed by no body text
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut metadata = Metadata::new();
        metadata.insert("id", "first");
        metadata.insert("domain", "general");
        let previous = metadata.insert("id", "second");

        assert_eq!(previous, Some(MetadataValue::from("first")));
        assert_eq!(metadata.keys().collect::<Vec<_>>(), vec!["id", "domain"]);
        assert_eq!(metadata.get("id").and_then(|v| v.as_str()), Some("second"));
    }

    #[test]
    fn numeric_accessors_widen_integers() {
        assert_eq!(MetadataValue::Integer(1).as_f64(), Some(1.0));
        assert_eq!(MetadataValue::Float(0.5).as_i64(), None);
        assert_eq!(MetadataValue::from("0.5").as_f64(), None);
        assert!(MetadataValue::Float(0.5).is_number());
    }

    #[test]
    fn metadata_serializes_as_ordered_map() {
        let metadata: Metadata = vec![
            ("id", MetadataValue::from("solo")),
            ("confidence", MetadataValue::Float(0.8)),
            ("weight", MetadataValue::Integer(3)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"id":"solo","confidence":0.8,"weight":3}"#);
    }
}
