//! Output formats for parsed records
//!
//! JSON and YAML print every record with its metadata, content and line. When more than one
//! document is given, each record also carries the `source` it came from. The summary format
//! prints one line per record.

use instinct_config::OutputFormat;
use instinct_parser::instinct::InstinctRecord;
use serde::Serialize;

/// A parsed document: where it came from and its records
pub type Document = (String, Vec<InstinctRecord>);

#[derive(Serialize)]
struct Entry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(flatten)]
    record: &'a InstinctRecord,
}

fn entries(documents: &[Document]) -> Vec<Entry<'_>> {
    let tag_source = documents.len() > 1;
    documents
        .iter()
        .flat_map(|(origin, records)| {
            records.iter().map(move |record| Entry {
                source: tag_source.then_some(origin.as_str()),
                record,
            })
        })
        .collect()
}

pub fn format_documents(documents: &[Document], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries(documents))
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {}", e)),
        OutputFormat::Yaml => serde_yaml::to_string(&entries(documents))
            .map_err(|e| format!("YAML serialization failed: {}", e)),
        OutputFormat::Summary => Ok(summary(documents)),
    }
}

fn summary(documents: &[Document]) -> String {
    let tag_source = documents.len() > 1;
    let mut out = String::new();
    for (origin, records) in documents {
        for record in records {
            if tag_source {
                out.push_str(&format!("{}:{}  ", origin, record.line));
            }
            out.push_str(&summary_line(record));
            out.push('\n');
        }
    }
    out
}

fn summary_line(record: &InstinctRecord) -> String {
    let confidence = record
        .confidence()
        .map(|c| format!("{:.2}", c))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  [{}]  {}  {}",
        record.id().unwrap_or("-"),
        record.domain().unwrap_or("-"),
        confidence,
        record.trigger().unwrap_or("-")
    )
}
