//! Journal distribution of a result set.

use std::collections::HashMap;

use keypaper_ingestion::models::PaperRecord;
use serde::Serialize;

pub const TOP_JOURNALS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalCount {
    pub journal: String,
    pub papers: usize,
}

/// Papers per journal, most frequent first, at most `top_n` journals.
/// Records without a journal are not counted. Equal counts keep the order
/// in which journals first appear.
pub fn journal_distribution(records: &[PaperRecord], top_n: usize) -> Vec<JournalCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<JournalCount> = Vec::new();

    for r in records.iter().filter(|r| !r.journal.is_empty()) {
        match positions.get(r.journal.as_str()) {
            Some(&i) => counts[i].papers += 1,
            None => {
                positions.insert(r.journal.as_str(), counts.len());
                counts.push(JournalCount { journal: r.journal.clone(), papers: 1 });
            }
        }
    }

    counts.sort_by(|a, b| b.papers.cmp(&a.papers));
    counts.truncate(top_n);
    counts
}
