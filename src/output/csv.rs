//! CSV serialization of matched articles
//!
//! Semicolon-delimited rows with a fixed column order. The extractor's
//! sentinel values are an internal convention; at this boundary they render
//! as empty cells.

use crate::extract::{ArticleRecord, SourceRef, AUTHOR_MISSING, DATE_MISSING, TITLE_MISSING};
use crate::SiftError;
use std::path::Path;

/// Fixed output column order
pub const CSV_COLUMNS: [&str; 7] = [
    "Title",
    "Author",
    "Publication Date",
    "Article URL",
    "Keywords Found",
    "Sources and Resources",
    "Full Text",
];

/// Writes the matched articles to a semicolon-delimited CSV file
///
/// The caller is expected to skip this entirely for an empty result set;
/// no artifact should exist for a crawl that matched nothing.
pub fn write_csv(records: &[ArticleRecord], path: &Path) -> Result<(), SiftError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;

    writer.write_record(CSV_COLUMNS)?;

    for record in records {
        let keywords = record.matched_keywords.join(", ");
        let sources = format_sources(&record.sources);

        writer.write_record([
            blank_if_sentinel(&record.title, TITLE_MISSING),
            blank_if_sentinel(&record.author, AUTHOR_MISSING),
            blank_if_sentinel(&record.publication_date, DATE_MISSING),
            record.url.as_str(),
            keywords.as_str(),
            sources.as_str(),
            record.body_text.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Pipe-joins the source references in document order
fn format_sources(sources: &[SourceRef]) -> String {
    sources
        .iter()
        .map(|source| source.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn blank_if_sentinel<'a>(value: &'a str, sentinel: &str) -> &'a str {
    if value == sentinel {
        ""
    } else {
        value
    }
}
