//! Data models for the search pipeline.
//!
//! `RawWork` and friends mirror the subset of the OpenAlex work object that
//! the pipeline selects. Everything is optional on the wire; `PaperRecord`
//! is the fixed shape handed to ranking, network analysis and export.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Word → positions mapping used by OpenAlex to ship abstracts.
/// Key order follows the JSON document.
pub type InvertedIndex = Map<String, Value>;

// ── Wire shapes ──────────────────────────────────────────────────────────────

/// One page of `GET /works`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorksPage {
    #[serde(default)]
    pub results: Vec<RawWork>,
    #[serde(default)]
    pub meta: WorksMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorksMeta {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWork {
    pub id: Option<String>,
    pub doi: Option<String>,
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub cited_by_count: Option<i64>,
    #[serde(rename = "type")]
    pub work_type: Option<String>,
    pub authorships: Option<Vec<Authorship>>,
    pub primary_location: Option<Location>,
    pub abstract_inverted_index: Option<InvertedIndex>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    pub author: Option<AuthorRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRef {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub source: Option<SourceRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceRef {
    pub display_name: Option<String>,
}

// ── Normalised records ───────────────────────────────────────────────────────

/// Heuristic tag derived from the title. Best-effort display aid only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperType {
    Review,
    Framework,
    Eval,
    Research,
}

impl PaperType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Review    => "Review",
            PaperType::Framework => "Framework",
            PaperType::Eval      => "Eval",
            PaperType::Research  => "Research",
        }
    }
}

impl std::fmt::Display for PaperType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat row derived from one `RawWork`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
    pub cited_by_count: u64,
    pub paper_type: PaperType,
    /// First five author names, in authorship order.
    pub authors: Vec<String>,
    /// Every named author (at most ten), for network analysis.
    pub author_list: Vec<String>,
    pub journal: String,
    pub doi: String,
    pub abstract_text: String,
}

impl PaperRecord {
    /// Authors as shown in tables and the CSV export.
    pub fn authors_display(&self) -> String {
        self.authors.join("; ")
    }
}

// ── Search parameters ────────────────────────────────────────────────────────

/// Which fields the query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchScope {
    pub title: bool,
    pub abstract_text: bool,
    pub concept_tag: bool,
}

impl Default for SearchScope {
    fn default() -> Self {
        Self { title: true, abstract_text: true, concept_tag: false }
    }
}

/// Field restriction actually sent to the API for a given scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    TitleOnly,
    AbstractOnly,
    /// Title + abstract + fulltext via the `search` parameter.
    Combined,
}

impl SearchScope {
    /// Only the two single-field selections narrow the search. Everything
    /// else, concept tags included, falls back to the combined search.
    pub fn mode(&self) -> ScopeMode {
        match (self.title, self.abstract_text, self.concept_tag) {
            (true, false, false) => ScopeMode::TitleOnly,
            (false, true, false) => ScopeMode::AbstractOnly,
            _                    => ScopeMode::Combined,
        }
    }
}

/// Everything that identifies one search. Also the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub year_from: i32,
    pub year_to: i32,
    pub scope: SearchScope,
    pub max_results: usize,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, year_from: i32, year_to: i32) -> Self {
        Self {
            query: query.into(),
            year_from,
            year_to,
            scope: SearchScope::default(),
            max_results: 500,
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Reject searches that must never reach the network.
    pub fn validate(&self) -> keypaper_common::Result<()> {
        if self.query.trim().is_empty() {
            return Err(keypaper_common::KeyPaperError::EmptyQuery);
        }
        if self.year_from > self.year_to {
            return Err(keypaper_common::KeyPaperError::InvalidYearRange {
                from: self.year_from,
                to: self.year_to,
            });
        }
        Ok(())
    }
}

/// Quick publication-window presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearPreset {
    Last5,
    Last10,
    Last15,
}

impl YearPreset {
    pub fn range(&self, current_year: i32) -> (i32, i32) {
        let span = match self {
            YearPreset::Last5  => 5,
            YearPreset::Last10 => 10,
            YearPreset::Last15 => 15,
        };
        (current_year - span, current_year)
    }
}

// ── Search result ────────────────────────────────────────────────────────────

/// Result of one search, records sorted by citation count (highest first).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub records: Vec<PaperRecord>,
    pub total_count: u64,
    /// User-facing message when the fetch failed and everything was discarded.
    pub error: Option<String>,
}

impl SearchOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self { records: Vec::new(), total_count: 0, error: Some(message.into()) }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypaper_common::KeyPaperError;

    #[test]
    fn test_scope_mode_policy() {
        let s = |title, abstract_text, concept_tag| SearchScope { title, abstract_text, concept_tag };
        assert_eq!(s(true, false, false).mode(), ScopeMode::TitleOnly);
        assert_eq!(s(false, true, false).mode(), ScopeMode::AbstractOnly);
        assert_eq!(s(true, true, false).mode(), ScopeMode::Combined);
        assert_eq!(s(false, false, true).mode(), ScopeMode::Combined);
        assert_eq!(s(true, false, true).mode(), ScopeMode::Combined);
        assert_eq!(s(false, false, false).mode(), ScopeMode::Combined);
    }

    #[test]
    fn test_blank_query_rejected() {
        let p = SearchParams::new("   ", 2015, 2025);
        assert!(matches!(p.validate(), Err(KeyPaperError::EmptyQuery)));
    }

    #[test]
    fn test_inverted_year_range_rejected() {
        let p = SearchParams::new("team science", 2025, 2015);
        assert!(matches!(p.validate(), Err(KeyPaperError::InvalidYearRange { from: 2025, to: 2015 })));
        assert!(SearchParams::new("team science", 2020, 2020).validate().is_ok());
    }

    #[test]
    fn test_year_presets() {
        assert_eq!(YearPreset::Last5.range(2026), (2021, 2026));
        assert_eq!(YearPreset::Last15.range(2026), (2011, 2026));
    }

    #[test]
    fn test_works_page_tolerates_missing_meta() {
        let page: WorksPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(page.meta.count, 0);
        assert!(page.meta.next_cursor.is_none());
    }

    #[test]
    fn test_authors_display_joined() {
        let rec = PaperRecord {
            id: "W1".into(),
            title: "t".into(),
            year: None,
            cited_by_count: 0,
            paper_type: PaperType::Research,
            authors: vec!["Ada Lovelace".into(), "Alan Turing".into()],
            author_list: vec![],
            journal: String::new(),
            doi: String::new(),
            abstract_text: String::new(),
        };
        assert_eq!(rec.authors_display(), "Ada Lovelace; Alan Turing");
    }
}
