//! CSV export of a full result set.
//!
//! UTF-8 with a byte-order mark so spreadsheet tools pick the right
//! encoding. Columns: title, year, cited_by_count, authors, journal, doi,
//! abstract.

use std::path::Path;

use keypaper_common::{KeyPaperError, Result};
use keypaper_ingestion::models::PaperRecord;
use serde::Serialize;
use tracing::info;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    year: Option<i32>,
    cited_by_count: u64,
    authors: String,
    journal: &'a str,
    doi: &'a str,
    #[serde(rename = "abstract")]
    abstract_text: &'a str,
}

impl<'a> From<&'a PaperRecord> for CsvRow<'a> {
    fn from(r: &'a PaperRecord) -> Self {
        Self {
            title: &r.title,
            year: r.year,
            cited_by_count: r.cited_by_count,
            authors: r.authors_display(),
            journal: &r.journal,
            doi: &r.doi,
            abstract_text: &r.abstract_text,
        }
    }
}

/// Serialise records, in the given order, to BOM-prefixed CSV bytes.
pub fn export_csv(records: &[PaperRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(UTF8_BOM.to_vec());
    for r in records {
        wtr.serialize(CsvRow::from(r))?;
    }
    wtr.into_inner().map_err(|e| KeyPaperError::Export(e.to_string()))
}

pub fn write_csv(records: &[PaperRecord], path: &Path) -> Result<()> {
    let bytes = export_csv(records)?;
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), rows = records.len(), "CSV export written");
    Ok(())
}

/// `KeyPaper_<first 15 characters of the query, spaces as underscores>.csv`
pub fn export_file_name(query: &str) -> String {
    let stem: String = query.chars().take(15).collect::<String>().replace(' ', "_");
    format!("KeyPaper_{stem}.csv")
}
