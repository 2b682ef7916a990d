//! Must-read list: the most cited papers of a search.

use keypaper_ingestion::models::PaperRecord;

pub const MUST_READ_COUNT: usize = 10;

/// One row of the must-read table.
#[derive(Debug, Clone, PartialEq)]
pub struct MustRead<'a> {
    /// 1-based.
    pub rank: usize,
    pub record: &'a PaperRecord,
}

impl MustRead<'_> {
    /// e.g. `1,234 citations`
    pub fn citations_label(&self) -> String {
        format!("{} citations", group_thousands(self.record.cited_by_count))
    }

    /// `Title (2021)`; works without a year show `n.d.`
    pub fn paper_label(&self) -> String {
        match self.record.year {
            Some(y) => format!("{} ({})", self.record.title, y),
            None => format!("{} (n.d.)", self.record.title),
        }
    }
}

/// Top `n` records by citation count. Equal counts keep input order.
pub fn must_read(records: &[PaperRecord], n: usize) -> Vec<MustRead<'_>> {
    let mut sorted: Vec<&PaperRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.cited_by_count.cmp(&a.cited_by_count));
    sorted
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, record)| MustRead { rank: i + 1, record })
        .collect()
}

/// `1234567` → `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
