//! Configuration loading for Key-Paper.
//! Reads keypaper.toml from the current directory or the path in the
//! KEYPAPER_CONFIG env var. A missing file means built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use keypaper_ingestion::models::SearchScope;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub openalex: OpenAlexConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAlexConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Email for the OpenAlex polite pool.
    pub mailto: Option<String>,
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url()      -> String { keypaper_ingestion::sources::openalex::OPENALEX_BASE_URL.to_string() }
fn default_page_delay_ms() -> u64    { 100 }
fn default_timeout_secs()  -> u64    { 30 }

impl Default for OpenAlexConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            mailto: None,
            page_delay_ms: default_page_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAlexConfig {
    pub fn page_delay(&self) -> Duration { Duration::from_millis(self.page_delay_ms) }
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Default window is the last N years up to the current one.
    #[serde(default = "default_span_years")]
    pub default_span_years: i32,
    #[serde(default = "bool_true")]
    pub title: bool,
    #[serde(default = "bool_true", rename = "abstract")]
    pub abstract_text: bool,
    #[serde(default)]
    pub concept_tag: bool,
}

fn default_max_results() -> usize { 500 }
fn default_span_years()  -> i32   { 10 }
fn bool_true()           -> bool  { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            default_span_years: default_span_years(),
            title: true,
            abstract_text: true,
            concept_tag: false,
        }
    }
}

impl SearchConfig {
    pub fn scope(&self) -> SearchScope {
        SearchScope { title: self.title, abstract_text: self.abstract_text, concept_tag: self.concept_tag }
    }

    pub fn default_range(&self, current_year: i32) -> (i32, i32) {
        (current_year - self.default_span_years, current_year)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_ttl_secs() -> u64   { 3600 }
fn default_capacity() -> usize { 64 }

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: default_ttl_secs(), capacity: default_capacity() }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration { Duration::from_secs(self.ttl_secs) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_papers")]
    pub top_papers: usize,
    #[serde(default = "default_top_authors")]
    pub top_authors: usize,
    #[serde(default = "default_top_journals")]
    pub top_journals: usize,
}

fn default_top_papers()   -> usize { keypaper_ranker::MUST_READ_COUNT }
fn default_top_authors()  -> usize { keypaper_kg::TOP_AUTHORS }
fn default_top_journals() -> usize { keypaper_ranker::TOP_JOURNALS }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_papers: default_top_papers(),
            top_authors: default_top_authors(),
            top_journals: default_top_journals(),
        }
    }
}


impl Config {
    /// Load configuration from keypaper.toml.
    /// Checks KEYPAPER_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("KEYPAPER_CONFIG")
            .unwrap_or_else(|_| "keypaper.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.search.default_span_years < 0 {
            anyhow::bail!("search.default_span_years must not be negative");
        }
        Ok(config)
    }
}
