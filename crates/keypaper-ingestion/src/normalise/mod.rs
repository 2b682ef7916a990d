//! Projection of raw OpenAlex works into `PaperRecord` rows.
//!
//! Submodules:
//! - `abstract_text` — inverted index → plain text
//! - `classify` — title heuristics for `PaperType`

pub mod abstract_text;
pub mod classify;

use crate::models::{PaperRecord, RawWork};
use abstract_text::reconstruct_abstract;
use classify::{PaperClassifier, TitleRuleClassifier};

/// Authorship entries considered per work.
pub const MAX_AUTHORSHIPS: usize = 10;
/// Authors kept for display and for the co-authorship network.
pub const DISPLAY_AUTHORS: usize = 5;

/// Normalise a batch of works with the default title classifier.
pub fn normalise_works(works: &[RawWork]) -> Vec<PaperRecord> {
    let classifier = TitleRuleClassifier;
    works.iter().map(|w| normalise_work(w, &classifier)).collect()
}

pub fn normalise_work(work: &RawWork, classifier: &dyn PaperClassifier) -> PaperRecord {
    let author_list: Vec<String> = work
        .authorships
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(MAX_AUTHORSHIPS)
        .filter_map(|a| a.author.as_ref()?.display_name.as_deref())
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    let authors = author_list.iter().take(DISPLAY_AUTHORS).cloned().collect();

    let journal = work
        .primary_location
        .as_ref()
        .and_then(|loc| loc.source.as_ref())
        .and_then(|src| src.display_name.clone())
        .unwrap_or_default();

    let title = work.title.clone().unwrap_or_default();

    PaperRecord {
        id:             work.id.clone().unwrap_or_default(),
        paper_type:     classifier.classify(&title),
        title,
        year:           work.publication_year,
        cited_by_count: work.cited_by_count.unwrap_or(0).max(0) as u64,
        authors,
        author_list,
        journal,
        doi:            work.doi.clone().unwrap_or_default(),
        abstract_text:  reconstruct_abstract(work.abstract_inverted_index.as_ref()),
    }
}

/// Link target for a DOI, whether stored bare or as a resolver URL.
pub fn doi_url(doi: &str) -> Option<String> {
    if doi.is_empty() {
        None
    } else if doi.starts_with("http") {
        Some(doi.to_string())
    } else {
        Some(format!("https://doi.org/{}", doi))
    }
}
